use chrono::{Duration, Local};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("checkin_app_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + std::time::Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/locations")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(std::time::Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_checkin_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

fn today() -> String {
    Local::now().date_naive().to_string()
}

fn days_from_today(offset: i64) -> String {
    (Local::now().date_naive() + Duration::days(offset)).to_string()
}

async fn create_location(client: &Client, base_url: &str, name: &str) -> Value {
    let response = client
        .post(format!("{base_url}/api/locations"))
        .json(&json!({ "name": name, "color": "#EF4444" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

async fn list(client: &Client, base_url: &str, path: &str) -> Vec<Value> {
    client
        .get(format!("{base_url}{path}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn completed_checklist() -> Value {
    json!([{ "id": "fill-audit", "label": "Fill Audit", "completed": true, "mandatory": true }])
}

#[tokio::test]
async fn http_location_crud_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let location = create_location(&client, &server.base_url, "Crud Store").await;
    let id = location["id"].as_str().unwrap().to_string();

    let locations = list(&client, &server.base_url, "/api/locations").await;
    assert!(locations.iter().any(|entry| entry["id"] == id.as_str()));

    let response = client
        .put(format!("{}/api/locations/{id}", server.base_url))
        .json(&json!({ "name": "Crud Store Renamed", "color": "#10B981" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let locations = list(&client, &server.base_url, "/api/locations").await;
    let renamed = locations
        .iter()
        .find(|entry| entry["id"] == id.as_str())
        .unwrap();
    assert_eq!(renamed["name"], "Crud Store Renamed");
    assert_eq!(renamed["color"], "#10B981");

    let response = client
        .delete(format!("{}/api/locations/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let locations = list(&client, &server.base_url, "/api/locations").await;
    assert!(!locations.iter().any(|entry| entry["id"] == id.as_str()));
}

#[tokio::test]
async fn http_blank_location_name_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/locations", server.base_url))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_check_in_today_is_accepted() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let location = create_location(&client, &server.base_url, "Today Store").await;
    let response = client
        .post(format!("{}/api/check-ins", server.base_url))
        .json(&json!({
            "date": today(),
            "locationId": location["id"],
            "observations": "all fine",
            "checklistItems": completed_checklist(),
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let created: Value = response.json().await.unwrap();
    assert_eq!(created["date"], today().as_str());

    let check_ins = list(&client, &server.base_url, "/api/check-ins").await;
    assert!(check_ins.iter().any(|entry| entry["id"] == created["id"]));
}

#[tokio::test]
async fn http_future_check_in_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let location = create_location(&client, &server.base_url, "Future Store").await;
    let before = list(&client, &server.base_url, "/api/check-ins").await.len();

    let response = client
        .post(format!("{}/api/check-ins", server.base_url))
        .json(&json!({
            "date": days_from_today(1),
            "locationId": location["id"],
            "checklistItems": completed_checklist(),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let after = list(&client, &server.base_url, "/api/check-ins").await.len();
    assert_eq!(after, before);
}

#[tokio::test]
async fn http_incomplete_mandatory_checklist_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let location = create_location(&client, &server.base_url, "Checklist Store").await;
    let before = list(&client, &server.base_url, "/api/check-ins").await.len();

    let response = client
        .post(format!("{}/api/check-ins", server.base_url))
        .json(&json!({
            "date": today(),
            "locationId": location["id"],
            "checklistItems": [
                { "id": "fill-audit", "label": "Fill Audit", "completed": false, "mandatory": true },
                { "id": "check-locks", "label": "Check Locks", "completed": true, "mandatory": false },
            ],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let message = response.text().await.unwrap();
    assert!(message.contains("Fill Audit"));

    let after = list(&client, &server.base_url, "/api/check-ins").await.len();
    assert_eq!(after, before);
}

#[tokio::test]
async fn http_planned_check_in_date_bounds() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let location = create_location(&client, &server.base_url, "Plan Store").await;

    let response = client
        .post(format!("{}/api/planned", server.base_url))
        .json(&json!({
            "date": days_from_today(-1),
            "locationId": location["id"],
            "notes": "too late",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/api/planned", server.base_url))
        .json(&json!({
            "date": today(),
            "locationId": location["id"],
            "notes": "on time",
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn http_convert_planned_moves_the_record() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let location = create_location(&client, &server.base_url, "Convert Store").await;
    let planned: Value = client
        .post(format!("{}/api/planned", server.base_url))
        .json(&json!({
            "date": today(),
            "locationId": location["id"],
            "notes": "bring the paperwork",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let planned_id = planned["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/api/planned/{planned_id}/convert", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let converted: Value = response.json().await.unwrap();

    assert_eq!(converted["date"], planned["date"]);
    assert_eq!(converted["locationId"], planned["locationId"]);
    assert_eq!(converted["observations"], "bring the paperwork");
    assert_eq!(converted["checklistItems"].as_array().unwrap().len(), 1);

    let still_planned = list(&client, &server.base_url, "/api/planned").await;
    assert!(!still_planned
        .iter()
        .any(|entry| entry["id"] == planned_id.as_str()));

    let check_ins = list(&client, &server.base_url, "/api/check-ins").await;
    assert!(check_ins.iter().any(|entry| entry["id"] == converted["id"]));
}

#[tokio::test]
async fn http_export_produces_quoted_rows_and_filename() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let location = create_location(&client, &server.base_url, "Export Store").await;
    let created: Value = client
        .post(format!("{}/api/check-ins", server.base_url))
        .json(&json!({
            "date": today(),
            "locationId": location["id"],
            "observations": "a,b",
            "checklistItems": completed_checklist(),
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .get(format!(
            "{}/api/export?from={}&to={}",
            server.base_url,
            today(),
            today(),
        ))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains(&format!("checkins_{}_to_{}.csv", today(), today())));

    let body = response.text().await.unwrap();
    assert!(body.starts_with("ID,Date,Location,Observations"));
    let expected_row = format!(
        "\"{}\",\"{}\",\"Export Store\",\"a,b\"",
        created["id"].as_str().unwrap(),
        today(),
    );
    assert!(body.lines().any(|line| line == expected_row));
}

#[tokio::test]
async fn http_export_rejects_inverted_range() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/export?from={}&to={}",
            server.base_url,
            today(),
            days_from_today(-1),
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_calendar_returns_the_month_grid() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let grid: Value = client
        .get(format!(
            "{}/api/calendar?year=2024&month=6",
            server.base_url,
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(grid["monthName"], "June");
    assert_eq!(grid["leadingBlanks"], 6);
    assert_eq!(grid["days"].as_array().unwrap().len(), 30);
    assert_eq!(grid["prevMonth"], 5);
    assert_eq!(grid["nextMonth"], 7);
}

#[tokio::test]
async fn http_alerts_reflect_the_current_store() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let alerts: Value = client
        .get(format!("{}/api/alerts", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(alerts["weekly"].is_array());
    assert!(alerts["monthly"].is_array());
    for alert in alerts["weekly"].as_array().unwrap() {
        assert!(alert["status"] == "excess" || alert["status"] == "missing");
        assert_ne!(alert["actual"], alert["expected"]);
    }
}
