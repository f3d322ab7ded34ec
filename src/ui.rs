use crate::models::SummaryResponse;

pub fn render_index(summary: &SummaryResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &summary.date.to_string())
        .replace("{{COMPLETED}}", &summary.completed_today.to_string())
        .replace("{{STREAK}}", &summary.streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f0;
      --bg-2: #cde8d6;
      --ink: #23302a;
      --accent: #2f9e6e;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 88, 66, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2f3e8 60%, #f2f7ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5c6b62;
      font-size: 1rem;
    }

    .summary {
      display: flex;
      gap: 12px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 88, 66, 0.1);
      text-align: center;
      min-width: 110px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d8a81;
    }

    .stat .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    form.add-habit {
      display: grid;
      grid-template-columns: 2fr 2fr 1fr auto;
      gap: 12px;
      align-items: end;
    }

    .field {
      display: grid;
      gap: 4px;
    }

    .field label {
      font-size: 0.85rem;
      color: #5c6b62;
    }

    .field .counter {
      font-size: 0.75rem;
      color: #98a59c;
      justify-self: end;
    }

    input[type="text"], select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 88, 66, 0.2);
      background: white;
      width: 100%;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 158, 110, 0.3);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: var(--danger);
      color: white;
    }

    .view-bar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #6b7a71;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .period-nav {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .period-nav .period {
      font-weight: 600;
      min-width: 150px;
      text-align: center;
    }

    .habit-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 88, 66, 0.1);
      display: grid;
      gap: 14px;
      margin-bottom: 14px;
    }

    .habit-header {
      display: flex;
      justify-content: space-between;
      gap: 12px;
    }

    .habit-name {
      margin: 0;
      font-size: 1.2rem;
    }

    .habit-category {
      display: inline-block;
      margin-left: 8px;
      padding: 2px 10px;
      border-radius: 999px;
      font-size: 0.75rem;
      background: rgba(47, 158, 110, 0.12);
      color: var(--accent);
      vertical-align: middle;
    }

    .habit-goal {
      margin: 4px 0 0;
      color: #5c6b62;
      font-size: 0.9rem;
    }

    .habit-actions {
      display: flex;
      gap: 8px;
      align-items: flex-start;
    }

    .habit-actions button {
      padding: 8px 12px;
      font-size: 0.85rem;
    }

    .progress-row {
      display: flex;
      align-items: center;
      gap: 12px;
      font-size: 0.9rem;
      color: #5c6b62;
    }

    .progress-bar {
      flex: 1;
      height: 8px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      background: var(--accent);
      border-radius: 999px;
    }

    .days-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(54px, 1fr));
      gap: 6px;
    }

    .day-cell {
      border: 1px solid rgba(47, 72, 88, 0.15);
      border-radius: 12px;
      padding: 6px 4px;
      text-align: center;
      cursor: pointer;
      background: white;
      user-select: none;
    }

    .day-cell .day-number {
      display: block;
      font-weight: 600;
    }

    .day-cell .day-name {
      display: block;
      font-size: 0.7rem;
      color: #7d8a81;
    }

    .day-cell.completed {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .day-cell.completed .day-name {
      color: rgba(255, 255, 255, 0.85);
    }

    .empty-state {
      text-align: center;
      color: #6b7a71;
      padding: 32px 0;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7a71;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .footer-bar {
      display: flex;
      justify-content: flex-end;
    }

    .modal {
      position: fixed;
      inset: 0;
      display: none;
      place-items: center;
      background: rgba(35, 48, 42, 0.45);
      padding: 18px;
    }

    .modal.active {
      display: grid;
    }

    .modal-card {
      width: min(480px, 100%);
      background: white;
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    .modal-card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .modal-card form {
      display: grid;
      gap: 12px;
    }

    .modal-buttons {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    @media (max-width: 700px) {
      form.add-habit {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle">Mark each day you follow through. Today is {{DATE}}.</p>
      </div>
      <div class="summary">
        <div class="stat">
          <span class="label">Done today</span>
          <span id="completed-count" class="value">{{COMPLETED}}</span>
        </div>
        <div class="stat">
          <span class="label">Day streak</span>
          <span id="streak-count" class="value">{{STREAK}}</span>
        </div>
      </div>
    </header>

    <form id="add-habit-form" class="add-habit">
      <div class="field">
        <label for="habit-name">Habit name</label>
        <input type="text" id="habit-name" maxlength="50" placeholder="e.g. Read" required />
        <span class="counter" id="name-counter">0/50</span>
      </div>
      <div class="field">
        <label for="habit-goal">Daily goal (optional)</label>
        <input type="text" id="habit-goal" maxlength="30" placeholder="e.g. 20 pages" />
        <span class="counter" id="goal-counter">0/30</span>
      </div>
      <div class="field">
        <label for="habit-category">Category</label>
        <select id="habit-category">
          <option value="">None</option>
          <option value="health">Health &amp; Fitness</option>
          <option value="learning">Learning</option>
          <option value="productivity">Productivity</option>
          <option value="mindfulness">Mindfulness</option>
          <option value="social">Social</option>
          <option value="finance">Finance</option>
          <option value="other">Other</option>
        </select>
      </div>
      <button class="btn-primary" type="submit">Add habit</button>
    </form>

    <section class="view-bar">
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-view="weekly" role="tab" aria-selected="true">Weekly</button>
        <button class="tab" type="button" data-view="monthly" role="tab" aria-selected="false">Monthly</button>
      </div>
      <div class="period-nav">
        <button class="btn-ghost" id="prev-period" type="button">&larr;</button>
        <span class="period" id="current-period"></span>
        <button class="btn-ghost" id="next-period" type="button">&rarr;</button>
      </div>
    </section>

    <section id="habits-container"></section>

    <div class="status" id="status"></div>

    <div class="footer-bar">
      <button class="btn-danger" id="clear-storage" type="button">Clear all data</button>
    </div>
  </main>

  <div class="modal" id="edit-modal">
    <div class="modal-card">
      <h2>Edit habit</h2>
      <form id="edit-habit-form">
        <input type="hidden" id="edit-habit-id" />
        <div class="field">
          <label for="edit-habit-name">Habit name</label>
          <input type="text" id="edit-habit-name" maxlength="50" required />
        </div>
        <div class="field">
          <label for="edit-habit-goal">Daily goal (optional)</label>
          <input type="text" id="edit-habit-goal" maxlength="30" />
        </div>
        <div class="field">
          <label for="edit-habit-category">Category</label>
          <select id="edit-habit-category">
            <option value="">None</option>
            <option value="health">Health &amp; Fitness</option>
            <option value="learning">Learning</option>
            <option value="productivity">Productivity</option>
            <option value="mindfulness">Mindfulness</option>
            <option value="social">Social</option>
            <option value="finance">Finance</option>
            <option value="other">Other</option>
          </select>
        </div>
        <div class="modal-buttons">
          <button class="btn-ghost btn-close-modal" type="button">Cancel</button>
          <button class="btn-primary" type="submit">Save changes</button>
        </div>
      </form>
    </div>
  </div>

  <script>
    const habitsContainer = document.getElementById('habits-container');
    const statusEl = document.getElementById('status');
    const completedEl = document.getElementById('completed-count');
    const streakEl = document.getElementById('streak-count');
    const periodEl = document.getElementById('current-period');
    const addForm = document.getElementById('add-habit-form');
    const nameInput = document.getElementById('habit-name');
    const goalInput = document.getElementById('habit-goal');
    const categoryInput = document.getElementById('habit-category');
    const nameCounter = document.getElementById('name-counter');
    const goalCounter = document.getElementById('goal-counter');
    const editModal = document.getElementById('edit-modal');
    const editForm = document.getElementById('edit-habit-form');
    const editId = document.getElementById('edit-habit-id');
    const editName = document.getElementById('edit-habit-name');
    const editGoal = document.getElementById('edit-habit-goal');
    const editCategory = document.getElementById('edit-habit-category');
    const viewTabs = Array.from(document.querySelectorAll('.tab'));

    let view = 'weekly';
    let reference = null;
    let tracker = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => {
          if (statusEl.textContent === message) {
            setStatus('', '');
          }
        }, 4000);
      }
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const trackerUrl = () => {
      const params = new URLSearchParams({ view });
      if (reference) {
        params.set('date', reference);
      }
      return `/api/habits?${params}`;
    };

    const loadSummary = async () => {
      const summary = await api('/api/summary');
      completedEl.textContent = summary.completed_today;
      streakEl.textContent = summary.streak;
    };

    const loadTracker = async () => {
      tracker = await api(trackerUrl());
      reference = tracker.reference;
      periodEl.textContent = tracker.period;
      renderHabits();
    };

    const refresh = () => Promise.all([loadTracker(), loadSummary()]);

    const renderHabits = () => {
      habitsContainer.innerHTML = '';
      if (!tracker.habits.length) {
        const empty = document.createElement('div');
        empty.className = 'empty-state';
        empty.textContent = 'No habits yet. Add your first habit above.';
        habitsContainer.appendChild(empty);
        return;
      }
      tracker.habits.forEach((habit) => {
        habitsContainer.appendChild(renderHabitCard(habit));
      });
    };

    const renderHabitCard = (habit) => {
      const card = document.createElement('div');
      card.className = 'habit-card';

      const header = document.createElement('div');
      header.className = 'habit-header';

      const info = document.createElement('div');
      const name = document.createElement('h3');
      name.className = 'habit-name';
      name.textContent = habit.name;
      if (habit.category_label) {
        const badge = document.createElement('span');
        badge.className = 'habit-category';
        badge.textContent = habit.category_label;
        name.appendChild(badge);
      }
      info.appendChild(name);
      if (habit.goal) {
        const goal = document.createElement('p');
        goal.className = 'habit-goal';
        goal.textContent = `Daily goal: ${habit.goal}`;
        info.appendChild(goal);
      }

      const actions = document.createElement('div');
      actions.className = 'habit-actions';
      const editBtn = document.createElement('button');
      editBtn.className = 'btn-ghost';
      editBtn.type = 'button';
      editBtn.textContent = 'Edit';
      editBtn.addEventListener('click', () => openEditModal(habit));
      const deleteBtn = document.createElement('button');
      deleteBtn.className = 'btn-danger';
      deleteBtn.type = 'button';
      deleteBtn.textContent = 'Delete';
      deleteBtn.addEventListener('click', () => removeHabit(habit));
      actions.append(editBtn, deleteBtn);

      header.append(info, actions);
      card.appendChild(header);

      const progressRow = document.createElement('div');
      progressRow.className = 'progress-row';
      const bar = document.createElement('div');
      bar.className = 'progress-bar';
      const fill = document.createElement('div');
      fill.className = 'progress-fill';
      fill.style.width = `${habit.progress.percentage}%`;
      bar.appendChild(fill);
      const label = document.createElement('span');
      label.textContent =
        `${habit.progress.completed}/${habit.progress.total} days (${habit.progress.percentage}%)`;
      progressRow.append(bar, label);
      card.appendChild(progressRow);

      const grid = document.createElement('div');
      grid.className = 'days-grid';
      tracker.days.forEach((day, index) => {
        const cell = document.createElement('div');
        cell.className = 'day-cell';
        if (habit.completed[index]) {
          cell.classList.add('completed');
        }
        const number = document.createElement('span');
        number.className = 'day-number';
        number.textContent = day.date.slice(8).replace(/^0/, '');
        const dayName = document.createElement('span');
        dayName.className = 'day-name';
        dayName.textContent = day.label;
        cell.append(number, dayName);
        cell.addEventListener('click', () => toggleDay(habit, day.date));
        grid.appendChild(cell);
      });
      card.appendChild(grid);

      return card;
    };

    const addHabit = async (event) => {
      event.preventDefault();
      try {
        await api('/api/habits', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            name: nameInput.value,
            goal: goalInput.value,
            category: categoryInput.value
          })
        });
        addForm.reset();
        updateCounters();
        setStatus('Habit added', 'ok');
        await refresh();
        nameInput.focus();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const saveEdit = async (event) => {
      event.preventDefault();
      try {
        await api(`/api/habits/${editId.value}`, {
          method: 'PUT',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            name: editName.value,
            goal: editGoal.value,
            category: editCategory.value
          })
        });
        editModal.classList.remove('active');
        setStatus('Habit updated', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const removeHabit = async (habit) => {
      if (!window.confirm(`Are you sure you want to delete "${habit.name}"?`)) {
        return;
      }
      try {
        await api(`/api/habits/${habit.id}`, { method: 'DELETE' });
        setStatus('Habit deleted', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const toggleDay = async (habit, date) => {
      try {
        await api(`/api/habits/${habit.id}/toggle`, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ date })
        });
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const clearAll = async () => {
      if (!window.confirm('Are you sure you want to clear all data? This cannot be undone.')) {
        return;
      }
      try {
        await api('/api/clear', { method: 'POST' });
        setStatus('All data has been cleared', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const openEditModal = (habit) => {
      editId.value = habit.id;
      editName.value = habit.name;
      editGoal.value = habit.goal || '';
      editCategory.value = habit.category || '';
      editModal.classList.add('active');
      editName.focus();
    };

    const setView = (nextView) => {
      view = nextView;
      viewTabs.forEach((tab) => {
        const active = tab.dataset.view === view;
        tab.classList.toggle('active', active);
        tab.setAttribute('aria-selected', String(active));
      });
      loadTracker().catch((err) => setStatus(err.message, 'error'));
    };

    const updateCounters = () => {
      nameCounter.textContent = `${nameInput.value.length}/50`;
      goalCounter.textContent = `${goalInput.value.length}/30`;
    };

    viewTabs.forEach((tab) => {
      tab.addEventListener('click', () => setView(tab.dataset.view));
    });

    document.getElementById('prev-period').addEventListener('click', () => {
      reference = tracker ? tracker.prev : null;
      loadTracker().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-period').addEventListener('click', () => {
      reference = tracker ? tracker.next : null;
      loadTracker().catch((err) => setStatus(err.message, 'error'));
    });

    document.querySelectorAll('.btn-close-modal').forEach((button) => {
      button.addEventListener('click', () => editModal.classList.remove('active'));
    });

    editModal.addEventListener('click', (event) => {
      if (event.target === editModal) {
        editModal.classList.remove('active');
      }
    });

    nameInput.addEventListener('input', updateCounters);
    goalInput.addEventListener('input', updateCounters);
    addForm.addEventListener('submit', addHabit);
    editForm.addEventListener('submit', saveEdit);
    document.getElementById('clear-storage').addEventListener('click', clearAll);

    updateCounters();
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
