pub fn render_home(today: &str) -> String {
    render_page("New Audit", &HOME_CONTENT.replace("{{TODAY}}", today))
}

pub fn render_plan(today: &str) -> String {
    render_page("Plan Check-Ins", &PLAN_CONTENT.replace("{{TODAY}}", today))
}

pub fn render_manage() -> String {
    render_page("Manage Locations", MANAGE_CONTENT)
}

pub fn render_overview(today: &str) -> String {
    render_page("Check-In Calendar", &OVERVIEW_CONTENT.replace("{{TODAY}}", today))
}

fn render_page(title: &str, content: &str) -> String {
    SHELL_HTML
        .replace("{{TITLE}}", title)
        .replace("{{CONTENT}}", content)
}

const SHELL_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} - CheckIn App</title>
  <style>
    :root {
      --bg-1: #eef2ff;
      --bg-2: #dbeafe;
      --ink: #1f2937;
      --accent: #3b82f6;
      --accent-2: #4f46e5;
      --danger: #ef4444;
      --ok: #10b981;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 50px rgba(49, 46, 129, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2) 70%, #f8fafc);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    }

    header.top {
      background: white;
      box-shadow: 0 8px 24px rgba(49, 46, 129, 0.08);
    }

    .top-inner {
      max-width: 960px;
      margin: 0 auto;
      padding: 14px 20px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 10px;
    }

    .brand {
      font-weight: 700;
      font-size: 1.15rem;
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .brand .mark {
      width: 30px;
      height: 30px;
      border-radius: 8px;
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
    }

    nav.menu {
      display: flex;
      gap: 6px;
    }

    nav.menu a {
      color: var(--ink);
      text-decoration: none;
      padding: 8px 14px;
      border-radius: 8px;
      font-size: 0.95rem;
      font-weight: 500;
    }

    nav.menu a:hover {
      background: var(--bg-1);
      color: var(--accent-2);
    }

    nav.menu a.active {
      background: var(--accent);
      color: white;
    }

    #menu-toggle {
      display: none;
      border: none;
      background: var(--bg-1);
      border-radius: 8px;
      padding: 8px 12px;
      font-size: 1rem;
      cursor: pointer;
    }

    main.page {
      max-width: 960px;
      margin: 0 auto;
      padding: 24px 16px 56px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 20px;
    }

    .form-card {
      max-width: 640px;
      margin: 0 auto;
    }

    .card-header h1 {
      margin: 0 0 4px;
      font-size: 1.8rem;
    }

    .subtitle {
      margin: 0;
      color: #64748b;
      font-size: 0.95rem;
    }

    form {
      display: grid;
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #475569;
    }

    input, select, textarea {
      font: inherit;
      font-weight: 400;
      padding: 10px 12px;
      border: 1px solid #cbd5e1;
      border-radius: 10px;
      background: white;
      color: var(--ink);
    }

    textarea {
      resize: none;
    }

    .field-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
    }

    .checklist {
      border: 1px solid #e2e8f0;
      border-radius: 12px;
      padding: 12px 16px 16px;
      display: grid;
      gap: 8px;
    }

    .checklist legend {
      font-weight: 600;
      font-size: 0.9rem;
      color: #475569;
      padding: 0 6px;
    }

    .check-item {
      display: flex;
      align-items: center;
      gap: 8px;
      font-weight: 500;
    }

    .check-item.mandatory {
      color: #b91c1c;
    }

    .hint {
      margin: 0;
      color: #94a3b8;
      font-size: 0.8rem;
    }

    button {
      font: inherit;
      border: none;
      border-radius: 10px;
      padding: 11px 18px;
      font-weight: 600;
      cursor: pointer;
    }

    .btn-primary {
      background: linear-gradient(135deg, var(--accent), var(--accent-2));
      color: white;
    }

    .btn-muted {
      background: #e2e8f0;
      color: var(--ink);
    }

    .btn-danger {
      background: var(--danger);
      color: white;
    }

    .btn-icon {
      background: transparent;
      color: var(--accent-2);
      padding: 4px 8px;
      font-size: 0.85rem;
    }

    .form-actions {
      display: flex;
      gap: 10px;
    }

    .swatches {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .swatch {
      width: 30px;
      height: 30px;
      border-radius: 50%;
      border: 2px solid #cbd5e1;
      padding: 0;
    }

    .swatch.selected {
      border-color: var(--ink);
      transform: scale(1.12);
    }

    .record-list {
      display: grid;
      gap: 10px;
    }

    .record-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      background: #f8fafc;
      border-radius: 12px;
      padding: 12px 14px;
    }

    .record-row .who {
      display: flex;
      align-items: center;
      gap: 10px;
      font-weight: 600;
    }

    .dot {
      width: 14px;
      height: 14px;
      border-radius: 50%;
      border: 1px solid rgba(0, 0, 0, 0.15);
      display: inline-block;
      flex: none;
    }

    .empty {
      text-align: center;
      color: #94a3b8;
      padding: 18px 0;
    }

    .alerts {
      display: grid;
      gap: 8px;
    }

    .alert {
      border-radius: 10px;
      padding: 10px 14px;
      font-size: 0.92rem;
      border: 1px solid;
    }

    .alert.missing {
      background: #fef2f2;
      border-color: #fecaca;
      color: #991b1b;
    }

    .alert.excess {
      background: #fefce8;
      border-color: #fde68a;
      color: #92400e;
    }

    .alert-detail {
      display: block;
      font-size: 0.85rem;
      margin-top: 2px;
    }

    .export-card {
      background: #f8fafc;
      border-radius: 14px;
      padding: 16px;
      display: grid;
      gap: 12px;
    }

    .export-card h3 {
      margin: 0;
      font-size: 1rem;
    }

    .month-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .month-nav h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
      background: #f8fafc;
      border-radius: 14px;
      padding: 14px;
    }

    .weekday {
      text-align: center;
      font-size: 0.75rem;
      font-weight: 700;
      letter-spacing: 0.08em;
      text-transform: uppercase;
      color: #64748b;
      padding: 6px 0;
    }

    .day {
      position: relative;
      min-height: 52px;
      border-radius: 10px;
      background: white;
      display: grid;
      place-items: center;
      font-weight: 600;
    }

    .day.blank {
      background: transparent;
    }

    .day.has-records {
      color: white;
      cursor: pointer;
    }

    .day.today {
      outline: 3px solid var(--ok);
      outline-offset: 1px;
    }

    .count {
      position: absolute;
      top: -6px;
      font-size: 0.7rem;
      font-weight: 700;
      width: 18px;
      height: 18px;
      border-radius: 50%;
      display: grid;
      place-items: center;
    }

    .count.actual {
      right: -4px;
      background: #facc15;
      color: var(--ink);
    }

    .count.planned-count {
      right: 16px;
      background: #60a5fa;
      color: white;
      border: 2px solid white;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(15, 23, 42, 0.55);
      display: grid;
      place-items: center;
      padding: 16px;
      z-index: 40;
    }

    .modal {
      background: white;
      border-radius: 18px;
      box-shadow: var(--shadow);
      width: min(460px, 100%);
      max-height: 85vh;
      overflow-y: auto;
      padding: 22px;
      display: grid;
      gap: 14px;
    }

    .modal h3 {
      margin: 0;
      text-align: center;
    }

    .entry-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .entry {
      background: #f8fafc;
      border-radius: 12px;
      padding: 12px;
      display: grid;
      gap: 8px;
    }

    .entry.planned {
      background: #eff6ff;
      border: 1px solid #bfdbfe;
    }

    .entry-head {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .entry-name {
      font-weight: 600;
      flex: 1;
    }

    .entry-buttons {
      display: flex;
      gap: 2px;
    }

    .entry-notes {
      margin: 0;
      color: #64748b;
      font-size: 0.88rem;
    }

    .entry-checklist {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
    }

    .badge {
      background: #dbeafe;
      color: #1d4ed8;
      font-size: 0.72rem;
      font-weight: 700;
      border-radius: 999px;
      padding: 2px 8px;
    }

    .confirm {
      background: #fef2f2;
      border-radius: 10px;
      padding: 10px;
      font-size: 0.88rem;
      color: #991b1b;
      display: grid;
      gap: 8px;
    }

    .entry-actions {
      display: flex;
      gap: 8px;
    }

    .modal-actions {
      display: grid;
      gap: 8px;
    }

    .status {
      position: fixed;
      bottom: 18px;
      left: 50%;
      transform: translateX(-50%);
      background: white;
      border-radius: 999px;
      box-shadow: var(--shadow);
      padding: 0 18px;
      font-size: 0.9rem;
      line-height: 2.4;
      min-height: 0;
      z-index: 60;
      pointer-events: none;
    }

    .status:empty {
      display: none;
    }

    .status[data-type="error"] {
      color: #c62828;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hidden {
      display: none !important;
    }

    @media (max-width: 640px) {
      #menu-toggle {
        display: block;
      }

      nav.menu {
        display: none;
        width: 100%;
        flex-direction: column;
      }

      nav.menu.open {
        display: flex;
      }

      .card {
        padding: 20px 16px;
      }
    }
  </style>
</head>
<body>
  <header class="top">
    <div class="top-inner">
      <div class="brand"><span class="mark"></span>CheckIn App</div>
      <button type="button" id="menu-toggle" aria-label="Toggle menu">Menu</button>
      <nav class="menu">
        <a href="/">Check-In</a>
        <a href="/plan">Plan</a>
        <a href="/manage">Locations</a>
        <a href="/overview">Overview</a>
      </nav>
    </div>
  </header>
  <div class="status" id="status"></div>
  <script>
    const setStatus = (message, type) => {
      const el = document.getElementById('status');
      el.textContent = message;
      el.dataset.type = type || '';
      if (message) {
        setTimeout(() => {
          el.textContent = '';
          el.dataset.type = '';
        }, 2600);
      }
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const sendJson = (path, body, method) =>
      api(path, {
        method: method || 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      }[ch]));

    document.querySelectorAll('nav.menu a').forEach((link) => {
      if (link.getAttribute('href') === window.location.pathname) {
        link.classList.add('active');
      }
    });

    document.getElementById('menu-toggle').addEventListener('click', () => {
      document.querySelector('nav.menu').classList.toggle('open');
    });
  </script>
  <main class="page">
{{CONTENT}}
  </main>
</body>
</html>
"##;

const HOME_CONTENT: &str = r##"<section class="card form-card">
  <header class="card-header">
    <h1>New Audit</h1>
    <p class="subtitle">Record your visit to a store.</p>
  </header>
  <form id="checkin-form">
    <div class="field-row">
      <label>Date
        <input type="date" id="checkin-date" value="{{TODAY}}" max="{{TODAY}}" required />
      </label>
      <label>Location
        <select id="checkin-location" required>
          <option value="">Select a store</option>
        </select>
      </label>
    </div>
    <label>Observations (optional)
      <textarea id="checkin-observations" rows="3" placeholder="Add any notes about your visit..."></textarea>
    </label>
    <fieldset class="checklist" id="checkin-checklist">
      <legend>Checklist</legend>
    </fieldset>
    <p class="hint">* Required items must be completed for the check-in to be valid.</p>
    <button type="submit" class="btn-primary">Check In</button>
  </form>
</section>
<script>
  const CHECKLIST = [
    { id: 'fill-audit', label: 'Fill Audit', completed: false, mandatory: true },
    { id: 'check-locks', label: 'Check Locks', completed: false, mandatory: false },
    { id: 'verify-signage', label: 'Verify Signage', completed: false, mandatory: false }
  ];

  const locationSelect = document.getElementById('checkin-location');
  const checklistEl = document.getElementById('checkin-checklist');
  const observationsEl = document.getElementById('checkin-observations');

  const renderChecklist = () => {
    checklistEl.querySelectorAll('.check-item').forEach((el) => el.remove());
    CHECKLIST.forEach((item, index) => {
      const row = document.createElement('label');
      row.className = 'check-item' + (item.mandatory ? ' mandatory' : '');
      const box = document.createElement('input');
      box.type = 'checkbox';
      box.checked = item.completed;
      box.addEventListener('change', () => {
        CHECKLIST[index].completed = box.checked;
      });
      row.appendChild(box);
      row.appendChild(document.createTextNode(item.label + (item.mandatory ? ' *' : '')));
      checklistEl.appendChild(row);
    });
  };

  const loadLocations = async () => {
    const locations = await api('/api/locations');
    locations.forEach((location) => {
      const option = document.createElement('option');
      option.value = location.id;
      option.textContent = location.name;
      locationSelect.appendChild(option);
    });
  };

  document.getElementById('checkin-form').addEventListener('submit', (event) => {
    event.preventDefault();
    sendJson('/api/check-ins', {
      date: document.getElementById('checkin-date').value,
      locationId: locationSelect.value,
      observations: observationsEl.value,
      checklistItems: CHECKLIST
    })
      .then(() => {
        observationsEl.value = '';
        CHECKLIST.forEach((item) => {
          item.completed = false;
        });
        renderChecklist();
        setStatus('Check-in saved successfully!', 'ok');
      })
      .catch((err) => setStatus(err.message, 'error'));
  });

  renderChecklist();
  loadLocations().catch((err) => setStatus(err.message, 'error'));
</script>
"##;

const PLAN_CONTENT: &str = r##"<section class="card form-card">
  <header class="card-header">
    <h1>Plan Check-Ins</h1>
    <p class="subtitle">Schedule your check-ins for future dates.</p>
  </header>
  <form id="plan-form">
    <div class="field-row">
      <label>Planned Date
        <input type="date" id="plan-date" value="{{TODAY}}" min="{{TODAY}}" required />
      </label>
      <label>Location
        <select id="plan-location" required>
          <option value="">Select a location</option>
        </select>
      </label>
    </div>
    <label>Notes (optional)
      <textarea id="plan-notes" rows="3" placeholder="Add notes about your planned visit..."></textarea>
    </label>
    <button type="submit" class="btn-primary">Plan Check-In</button>
  </form>
</section>
<script>
  const locationSelect = document.getElementById('plan-location');
  const notesEl = document.getElementById('plan-notes');

  const loadLocations = async () => {
    const locations = await api('/api/locations');
    locations.forEach((location) => {
      const option = document.createElement('option');
      option.value = location.id;
      option.textContent = location.name;
      locationSelect.appendChild(option);
    });
  };

  document.getElementById('plan-form').addEventListener('submit', (event) => {
    event.preventDefault();
    sendJson('/api/planned', {
      date: document.getElementById('plan-date').value,
      locationId: locationSelect.value,
      notes: notesEl.value
    })
      .then(() => {
        notesEl.value = '';
        setStatus('Check-in planned successfully!', 'ok');
      })
      .catch((err) => setStatus(err.message, 'error'));
  });

  loadLocations().catch((err) => setStatus(err.message, 'error'));
</script>
"##;

const MANAGE_CONTENT: &str = r##"<section class="card form-card">
  <header class="card-header">
    <h1>Manage Locations</h1>
    <p class="subtitle">Add, edit, and remove locations.</p>
  </header>
  <form id="location-form">
    <label>Location Name
      <input type="text" id="location-name" placeholder="Enter location name..." required />
    </label>
    <label>Color
      <input type="text" id="location-color" value="#3B82F6" />
    </label>
    <div class="swatches" id="swatches"></div>
    <div class="form-actions">
      <button type="submit" class="btn-primary" id="location-submit">Add Location</button>
      <button type="button" class="btn-muted hidden" id="location-cancel">Cancel</button>
    </div>
  </form>
  <h2>Your Locations</h2>
  <div id="location-list" class="record-list"></div>
</section>
<script>
  const PALETTE = ['#3B82F6', '#EF4444', '#10B981', '#F59E0B', '#8B5CF6', '#EC4899', '#06B6D4', '#84CC16', '#F97316', '#6366F1'];

  const nameInput = document.getElementById('location-name');
  const colorInput = document.getElementById('location-color');
  const listEl = document.getElementById('location-list');
  const submitBtn = document.getElementById('location-submit');
  const cancelBtn = document.getElementById('location-cancel');
  const swatchesEl = document.getElementById('swatches');

  let locations = [];
  let editingId = null;

  const markSelected = () => {
    swatchesEl.querySelectorAll('.swatch').forEach((swatch) => {
      swatch.classList.toggle('selected', swatch.dataset.color === colorInput.value);
    });
  };

  PALETTE.forEach((color) => {
    const swatch = document.createElement('button');
    swatch.type = 'button';
    swatch.className = 'swatch';
    swatch.style.background = color;
    swatch.dataset.color = color;
    swatch.title = 'Select ' + color;
    swatch.addEventListener('click', () => {
      colorInput.value = color;
      markSelected();
    });
    swatchesEl.appendChild(swatch);
  });

  const stopEditing = () => {
    editingId = null;
    nameInput.value = '';
    colorInput.value = PALETTE[0];
    submitBtn.textContent = 'Add Location';
    cancelBtn.classList.add('hidden');
    markSelected();
  };

  const renderList = () => {
    if (!locations.length) {
      listEl.innerHTML = '<p class="empty">No locations added yet</p>';
      return;
    }
    listEl.innerHTML = locations
      .map(
        (location) => `
        <div class="record-row">
          <span class="who">
            <span class="dot" style="background: ${location.color}"></span>
            ${escapeHtml(location.name)}
          </span>
          <span>
            <button type="button" class="btn-icon" data-action="edit" data-id="${location.id}">Edit</button>
            <button type="button" class="btn-icon" data-action="delete" data-id="${location.id}">Delete</button>
          </span>
        </div>`
      )
      .join('');
  };

  listEl.addEventListener('click', (event) => {
    const button = event.target.closest('button[data-action]');
    if (!button) {
      return;
    }
    const location = locations.find((entry) => entry.id === button.dataset.id);
    if (!location) {
      return;
    }
    if (button.dataset.action === 'edit') {
      editingId = location.id;
      nameInput.value = location.name;
      colorInput.value = location.color;
      submitBtn.textContent = 'Update Location';
      cancelBtn.classList.remove('hidden');
      markSelected();
    } else {
      api('/api/locations/' + location.id, { method: 'DELETE' })
        .then(refresh)
        .catch((err) => setStatus(err.message, 'error'));
    }
  });

  cancelBtn.addEventListener('click', stopEditing);

  document.getElementById('location-form').addEventListener('submit', (event) => {
    event.preventDefault();
    const payload = { name: nameInput.value, color: colorInput.value };
    const request = editingId
      ? sendJson('/api/locations/' + editingId, payload, 'PUT')
      : sendJson('/api/locations', payload);
    request
      .then(() => {
        stopEditing();
        return refresh();
      })
      .catch((err) => setStatus(err.message, 'error'));
  });

  const refresh = async () => {
    locations = await api('/api/locations');
    renderList();
  };

  markSelected();
  refresh().catch((err) => setStatus(err.message, 'error'));
</script>
"##;

const OVERVIEW_CONTENT: &str = r##"<section class="card">
  <header class="card-header">
    <h1>Check-In Calendar</h1>
    <p class="subtitle">View your check-ins by date.</p>
  </header>
  <div class="alerts" id="alerts"></div>
  <div class="export-card">
    <h3>Filter by Date Range (Optional)</h3>
    <div class="field-row">
      <label>From Date
        <input type="date" id="export-from" />
      </label>
      <label>To Date
        <input type="date" id="export-to" />
      </label>
    </div>
    <button type="button" class="btn-primary" id="export-btn">Export to CSV</button>
  </div>
  <div class="month-nav">
    <button type="button" class="btn-muted" id="prev-month">Previous</button>
    <h2 id="month-title"></h2>
    <button type="button" class="btn-muted" id="next-month">Next</button>
  </div>
  <div class="calendar" id="calendar"></div>
</section>

<div class="modal-backdrop hidden" id="day-modal">
  <div class="modal">
    <h3 id="modal-title"></h3>
    <ul class="entry-list" id="entry-list"></ul>
    <div class="modal-actions">
      <button type="button" class="btn-muted" id="add-entry">Add check-in</button>
      <button type="button" class="btn-danger" id="modal-close">Close</button>
    </div>
  </div>
</div>
<script>
  const TODAY = '{{TODAY}}';
  const WEEKDAYS = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];
  const DEFAULT_COLOR = '#3B82F6';

  const alertsEl = document.getElementById('alerts');
  const calendarEl = document.getElementById('calendar');
  const monthTitle = document.getElementById('month-title');
  const modal = document.getElementById('day-modal');
  const modalTitle = document.getElementById('modal-title');
  const entryList = document.getElementById('entry-list');
  const addEntryBtn = document.getElementById('add-entry');

  let checkIns = [];
  let planned = [];
  let locations = [];
  let grid = null;
  let view = { year: null, month: null };
  let selectedDay = null;
  let editingId = null;
  let addingEntry = false;
  let deletingId = null;

  const locationName = (id) => {
    const location = locations.find((entry) => entry.id === id);
    return location ? location.name : 'Unknown';
  };

  const locationColor = (id) => {
    const location = locations.find((entry) => entry.id === id);
    return location && location.color ? location.color : DEFAULT_COLOR;
  };

  const optionsHtml = (selectedId) =>
    ['<option value="">Select location</option>']
      .concat(
        locations.map(
          (location) =>
            `<option value="${location.id}"${location.id === selectedId ? ' selected' : ''}>${escapeHtml(location.name)}</option>`
        )
      )
      .join('');

  const alertLine = (scope, alert) => {
    const delta = Math.abs(alert.actual - alert.expected);
    const plural = delta === 1 ? '' : 's';
    const detail =
      alert.status === 'excess'
        ? `You have ${delta} extra check-in${plural} this ${scope}.`
        : `You are missing ${delta} check-in${plural} this ${scope}.`;
    const label = scope === 'week' ? 'Week' : 'Month';
    return `<div class="alert ${alert.status}">
      <strong>${label} ${alert.period}:</strong> ${alert.actual} check-ins (expected ${alert.expected})
      <span class="alert-detail">${detail}</span>
    </div>`;
  };

  const renderAlerts = (data) => {
    alertsEl.innerHTML = data.weekly
      .map((alert) => alertLine('week', alert))
      .concat(data.monthly.map((alert) => alertLine('month', alert)))
      .join('');
  };

  const renderCalendar = () => {
    monthTitle.textContent = grid.monthName + ' ' + grid.year;
    const cells = WEEKDAYS.map((day) => `<div class="weekday">${day}</div>`);
    for (let blank = 0; blank < grid.leadingBlanks; blank += 1) {
      cells.push('<div class="day blank"></div>');
    }
    grid.days.forEach((cell) => {
      const hasRecords = cell.checkIns > 0 || cell.planned > 0;
      const classes = ['day'];
      if (hasRecords) {
        classes.push('has-records');
      }
      if (cell.isToday) {
        classes.push('today');
      }
      const style = hasRecords ? ` style="background: ${cell.color}"` : '';
      const badges = [
        cell.checkIns ? `<span class="count actual">${cell.checkIns}</span>` : '',
        cell.planned ? `<span class="count planned-count">${cell.planned}</span>` : ''
      ].join('');
      cells.push(
        `<div class="${classes.join(' ')}"${style} data-date="${cell.date}" data-records="${hasRecords ? '1' : '0'}">
          <span class="day-number">${cell.day}</span>${badges}
        </div>`
      );
    });
    calendarEl.innerHTML = cells.join('');
  };

  const renderModal = () => {
    modalTitle.textContent = 'Check-ins for ' + selectedDay;
    addEntryBtn.classList.toggle('hidden', selectedDay > TODAY);
    const dayCheckIns = checkIns.filter((entry) => entry.date === selectedDay);
    const dayPlanned = planned.filter((entry) => entry.date === selectedDay);
    const parts = [];

    dayCheckIns.forEach((entry) => {
      if (editingId === entry.id) {
        parts.push(`<li class="entry editing">
          <div class="field-row">
            <label>Date <input type="date" id="edit-date" value="${entry.date}" /></label>
            <label>Location <select id="edit-location">${optionsHtml(entry.locationId)}</select></label>
          </div>
          <label>Observations <textarea id="edit-observations" rows="2" placeholder="Add notes...">${escapeHtml(entry.observations)}</textarea></label>
          <div class="entry-actions">
            <button type="button" class="btn-primary" data-action="save-edit" data-id="${entry.id}">Save</button>
            <button type="button" class="btn-muted" data-action="cancel-edit">Cancel</button>
          </div>
        </li>`);
        return;
      }

      const checklist = entry.checklistItems
        .map(
          (item) => `<label class="check-item${item.mandatory ? ' mandatory' : ''}">
            <input type="checkbox" data-check-in="${entry.id}" data-item="${item.id}"${item.completed ? ' checked' : ''} />
            ${escapeHtml(item.label)}${item.mandatory ? ' *' : ''}
          </label>`
        )
        .join('');

      const confirm =
        deletingId === entry.id
          ? `<div class="confirm">Are you sure you want to delete this check-in? This action cannot be undone.
              <div class="entry-actions">
                <button type="button" class="btn-danger" data-action="confirm-delete" data-id="${entry.id}">Delete</button>
                <button type="button" class="btn-muted" data-action="cancel-delete">Cancel</button>
              </div>
            </div>`
          : '';

      parts.push(`<li class="entry">
        <div class="entry-head">
          <span class="dot" style="background: ${locationColor(entry.locationId)}"></span>
          <span class="entry-name">${escapeHtml(locationName(entry.locationId))}</span>
          <span class="entry-buttons">
            <button type="button" class="btn-icon" data-action="edit" data-id="${entry.id}" title="Edit check-in">Edit</button>
            <button type="button" class="btn-icon" data-action="delete" data-id="${entry.id}" title="Delete check-in">Delete</button>
          </span>
        </div>
        ${entry.observations ? `<p class="entry-notes">${escapeHtml(entry.observations)}</p>` : ''}
        ${checklist ? `<div class="entry-checklist">${checklist}</div>` : ''}
        ${confirm}
      </li>`);
    });

    dayPlanned.forEach((entry) => {
      parts.push(`<li class="entry planned">
        <div class="entry-head">
          <span class="dot" style="background: ${locationColor(entry.locationId)}"></span>
          <span class="entry-name">${escapeHtml(locationName(entry.locationId))}</span>
          <span class="badge">Planned</span>
          <span class="entry-buttons">
            <button type="button" class="btn-icon" data-action="convert" data-id="${entry.id}" title="Convert to actual check-in">Convert</button>
            <button type="button" class="btn-icon" data-action="delete-planned" data-id="${entry.id}" title="Delete planned check-in">Delete</button>
          </span>
        </div>
        ${entry.notes ? `<p class="entry-notes">${escapeHtml(entry.notes)}</p>` : ''}
      </li>`);
    });

    if (addingEntry) {
      parts.push(`<li class="entry editing">
        <label>Location <select id="add-location">${optionsHtml('')}</select></label>
        <label>Observations <textarea id="add-observations" rows="2" placeholder="Add notes..."></textarea></label>
        <div class="entry-actions">
          <button type="button" class="btn-primary" data-action="save-add">Save</button>
          <button type="button" class="btn-muted" data-action="cancel-add">Cancel</button>
        </div>
      </li>`);
    }

    entryList.innerHTML = parts.join('');
  };

  const closeModal = () => {
    modal.classList.add('hidden');
    selectedDay = null;
    editingId = null;
    addingEntry = false;
    deletingId = null;
  };

  const loadRecords = async () => {
    [checkIns, planned, locations] = await Promise.all([
      api('/api/check-ins'),
      api('/api/planned'),
      api('/api/locations')
    ]);
  };

  const loadAlerts = async () => {
    renderAlerts(await api('/api/alerts'));
  };

  const loadCalendar = async () => {
    const params = view.year ? `?year=${view.year}&month=${view.month}` : '';
    grid = await api('/api/calendar' + params);
    view = { year: grid.year, month: grid.month };
    renderCalendar();
  };

  const refreshAll = () => Promise.all([loadRecords(), loadAlerts(), loadCalendar()]);

  calendarEl.addEventListener('click', (event) => {
    const cell = event.target.closest('.day[data-records="1"]');
    if (!cell) {
      return;
    }
    selectedDay = cell.dataset.date;
    editingId = null;
    addingEntry = false;
    deletingId = null;
    renderModal();
    modal.classList.remove('hidden');
  });

  entryList.addEventListener('click', (event) => {
    const button = event.target.closest('button[data-action]');
    if (!button) {
      return;
    }
    const action = button.dataset.action;
    const id = button.dataset.id;

    if (action === 'edit') {
      editingId = id;
      addingEntry = false;
      deletingId = null;
      renderModal();
    } else if (action === 'cancel-edit') {
      editingId = null;
      renderModal();
    } else if (action === 'save-edit') {
      const locationId = document.getElementById('edit-location').value;
      if (!locationId) {
        setStatus('Please select a location', 'error');
        return;
      }
      sendJson(
        '/api/check-ins/' + id,
        {
          date: document.getElementById('edit-date').value,
          locationId,
          observations: document.getElementById('edit-observations').value
        },
        'PUT'
      )
        .then(() => {
          editingId = null;
          return refreshAll();
        })
        .then(renderModal)
        .catch((err) => setStatus(err.message, 'error'));
    } else if (action === 'delete') {
      deletingId = id;
      renderModal();
    } else if (action === 'cancel-delete') {
      deletingId = null;
      renderModal();
    } else if (action === 'confirm-delete') {
      api('/api/check-ins/' + id, { method: 'DELETE' })
        .then(() => {
          deletingId = null;
          return refreshAll();
        })
        .then(renderModal)
        .catch((err) => setStatus(err.message, 'error'));
    } else if (action === 'delete-planned') {
      api('/api/planned/' + id, { method: 'DELETE' })
        .then(() => refreshAll())
        .then(renderModal)
        .catch((err) => setStatus(err.message, 'error'));
    } else if (action === 'convert') {
      sendJson('/api/planned/' + id + '/convert', {})
        .then(() => {
          setStatus('Planned check-in converted to actual check-in!', 'ok');
          return refreshAll();
        })
        .then(renderModal)
        .catch((err) => setStatus(err.message, 'error'));
    } else if (action === 'cancel-add') {
      addingEntry = false;
      renderModal();
    } else if (action === 'save-add') {
      const locationId = document.getElementById('add-location').value;
      if (!locationId) {
        setStatus('Please select a location', 'error');
        return;
      }
      sendJson('/api/check-ins', {
        date: selectedDay,
        locationId,
        observations: document.getElementById('add-observations').value,
        checklistItems: [{ id: 'fill-audit', label: 'Fill Audit', completed: true, mandatory: true }]
      })
        .then(() => {
          addingEntry = false;
          return refreshAll();
        })
        .then(renderModal)
        .catch((err) => setStatus(err.message, 'error'));
    }
  });

  entryList.addEventListener('change', (event) => {
    const box = event.target.closest('input[data-check-in]');
    if (!box) {
      return;
    }
    sendJson(
      '/api/check-ins/' + box.dataset.checkIn + '/checklist/' + box.dataset.item,
      { completed: box.checked },
      'PUT'
    )
      .then(() => loadRecords())
      .catch((err) => {
        box.checked = !box.checked;
        setStatus(err.message, 'error');
      });
  });

  addEntryBtn.addEventListener('click', () => {
    addingEntry = true;
    editingId = null;
    deletingId = null;
    renderModal();
  });

  document.getElementById('modal-close').addEventListener('click', closeModal);

  document.getElementById('prev-month').addEventListener('click', () => {
    view = { year: grid.prevYear, month: grid.prevMonth };
    loadCalendar().catch((err) => setStatus(err.message, 'error'));
  });

  document.getElementById('next-month').addEventListener('click', () => {
    view = { year: grid.nextYear, month: grid.nextMonth };
    loadCalendar().catch((err) => setStatus(err.message, 'error'));
  });

  document.getElementById('export-btn').addEventListener('click', async () => {
    const params = new URLSearchParams();
    const from = document.getElementById('export-from').value;
    const to = document.getElementById('export-to').value;
    if (from) {
      params.set('from', from);
    }
    if (to) {
      params.set('to', to);
    }
    const res = await fetch('/api/export?' + params.toString());
    if (!res.ok) {
      setStatus(await res.text(), 'error');
      return;
    }
    const disposition = res.headers.get('content-disposition') || '';
    const match = disposition.match(/filename="([^"]+)"/);
    const url = URL.createObjectURL(await res.blob());
    const link = document.createElement('a');
    link.href = url;
    link.download = match ? match[1] : 'checkins.csv';
    document.body.appendChild(link);
    link.click();
    link.remove();
    URL.revokeObjectURL(url);
  });

  refreshAll().catch((err) => setStatus(err.message, 'error'));
</script>
"##;
