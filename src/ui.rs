use crate::models::StatsResponse;

pub fn render_index(stats: &StatsResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &stats.date.date().format("%A, %B %-d, %Y").to_string())
        .replace("{{PERCENT}}", &stats.daily_percent.to_string())
        .replace("{{STREAK}}", &stats.streak.to_string())
        .replace("{{XP}}", &stats.lifetime_xp.to_string())
        .replace("{{WEEKLY}}", &stats.weekly_average.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Quest Tracker</title>
  <style>
    :root {
      --bg: #0f1226;
      --card: #181c3a;
      --ink: #e6e9ff;
      --muted: #a8b2d1;
      --green: #00ff88;
      --blue: #00d4ff;
      --purple: #b24bf3;
      --pink: #ff2e97;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, #1d2250, var(--bg) 60%);
      color: var(--ink);
      font-family: "Rajdhani", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 24px;
    }

    h1, h2 {
      margin: 0;
    }

    .subtitle, .hint {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(255, 255, 255, 0.06);
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.8rem;
      font-weight: 600;
      color: var(--green);
    }

    form.inline {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-bottom: 12px;
    }

    input, select, button {
      font: inherit;
      border-radius: 10px;
      border: 1px solid rgba(255, 255, 255, 0.15);
      background: #0f1226;
      color: var(--ink);
      padding: 8px 12px;
    }

    button {
      cursor: pointer;
      background: linear-gradient(135deg, var(--green), var(--blue));
      color: var(--bg);
      font-weight: 700;
      border: none;
    }

    button.ghost {
      background: transparent;
      color: var(--muted);
      border: 1px solid rgba(255, 255, 255, 0.15);
    }

    .quest {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 10px 0;
      border-bottom: 1px solid rgba(255, 255, 255, 0.06);
    }

    .quest.completed .text {
      text-decoration: line-through;
      color: var(--muted);
    }

    .quest .text {
      flex: 1;
    }

    .badge {
      font-size: 0.8rem;
      padding: 2px 8px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.08);
    }

    .habits {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.08);
      overflow: hidden;
      margin: 8px 0;
    }

    .bar > div {
      height: 100%;
      background: linear-gradient(90deg, var(--green), var(--blue));
    }

    svg {
      width: 100%;
      height: 200px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--green);
      stroke-width: 3;
    }

    .chart-bar {
      fill: var(--blue);
      opacity: 0.7;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar .head {
      text-align: center;
      font-weight: 700;
      color: var(--blue);
    }

    .day {
      border-radius: 10px;
      padding: 6px;
      min-height: 52px;
      background: rgba(255, 255, 255, 0.04);
      font-size: 0.85rem;
    }

    .day.low { background: rgba(255, 46, 151, 0.3); }
    .day.medium { background: rgba(0, 212, 255, 0.3); }
    .day.high { background: rgba(0, 255, 136, 0.35); }
    .day.today { outline: 2px solid var(--purple); }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--pink);
    }

    .status[data-type="ok"] {
      color: var(--green);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Quest Tracker</h1>
      <p class="subtitle" id="date">{{DATE}}</p>
    </header>

    <section class="panel">
      <div class="card stat"><span class="label">Daily progress</span><span class="value" id="daily">{{PERCENT}}%</span></div>
      <div class="card stat"><span class="label">Current streak</span><span class="value" id="streak">{{STREAK}}</span></div>
      <div class="card stat"><span class="label">Total XP</span><span class="value" id="xp">{{XP}} XP</span></div>
      <div class="card stat"><span class="label">Weekly average</span><span class="value" id="weekly">{{WEEKLY}}%</span></div>
    </section>

    <section class="card">
      <h2>Today's quests</h2>
      <form class="inline" id="task-form">
        <input id="task-text" placeholder="New quest" />
        <select id="task-priority">
          <option value="low">low</option>
          <option value="medium" selected>medium</option>
          <option value="high">high</option>
        </select>
        <input id="task-xp" type="number" min="1" value="10" />
        <button type="submit">Add quest</button>
      </form>
      <div id="quests"></div>
    </section>

    <section class="card">
      <h2>Habits</h2>
      <form class="inline" id="habit-form">
        <input id="habit-name" placeholder="New habit" />
        <input id="habit-icon" value="💪" size="3" />
        <select id="habit-frequency">
          <option value="daily" selected>daily</option>
          <option value="weekly">weekly</option>
        </select>
        <input id="habit-target" type="number" min="1" value="1" />
        <button type="submit">Add habit</button>
      </form>
      <div class="habits" id="habits"></div>
    </section>

    <section class="panel">
      <div class="card"><h2>Last 7 days</h2><svg id="chart-7" viewBox="0 0 600 200"></svg></div>
      <div class="card"><h2>Habits</h2><svg id="chart-habits" viewBox="0 0 600 200"></svg></div>
    </section>

    <section class="card">
      <h2>Last 30 days</h2>
      <svg id="chart-30" viewBox="0 0 600 200"></svg>
    </section>

    <section class="card">
      <form class="inline">
        <button class="ghost" type="button" id="prev-month">‹</button>
        <h2 id="month-title"></h2>
        <button class="ghost" type="button" id="next-month">›</button>
      </form>
      <div class="calendar" id="calendar"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Daily habits reset and completed quest XP is banked after midnight.</p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    let monthOffset = 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderStats = (stats) => {
      document.getElementById('daily').textContent = `${stats.daily_percent}%`;
      document.getElementById('streak').textContent = stats.streak;
      document.getElementById('xp').textContent = `${stats.lifetime_xp} XP`;
      document.getElementById('weekly').textContent = `${stats.weekly_average}%`;
    };

    const button = (label, onClick, ghost) => {
      const el = document.createElement('button');
      el.type = 'button';
      el.textContent = label;
      if (ghost) {
        el.className = 'ghost';
      }
      el.addEventListener('click', () => onClick().catch((err) => setStatus(err.message, 'error')));
      return el;
    };

    const renderQuests = (tasks) => {
      const list = document.getElementById('quests');
      list.innerHTML = '';
      if (!tasks.length) {
        list.textContent = 'No quests for today. Add one above!';
        return;
      }
      tasks.forEach((task) => {
        const row = document.createElement('div');
        row.className = `quest ${task.completed ? 'completed' : ''}`;
        const check = document.createElement('input');
        check.type = 'checkbox';
        check.checked = task.completed;
        check.addEventListener('change', () => mutate('POST', `/api/tasks/${task.id}/toggle`));
        const text = document.createElement('span');
        text.className = 'text';
        text.textContent = task.text;
        const priority = document.createElement('span');
        priority.className = 'badge';
        priority.textContent = task.priority;
        const xp = document.createElement('span');
        xp.className = 'badge';
        xp.textContent = `${task.xp} XP`;
        row.append(check, text, priority, xp,
          button('Edit', () => {
            const text = prompt('Quest name', task.text);
            if (text === null) {
              return Promise.resolve();
            }
            const priority = prompt('Priority (low, medium, high)', task.priority);
            if (priority === null) {
              return Promise.resolve();
            }
            if (!['low', 'medium', 'high'].includes(priority.trim())) {
              setStatus('Priority must be low, medium or high', 'error');
              return Promise.resolve();
            }
            const xp = prompt('XP reward', task.xp);
            if (xp === null) {
              return Promise.resolve();
            }
            return mutate('PUT', `/api/tasks/${task.id}`, {
              text,
              priority: priority.trim(),
              xp: parseInt(xp, 10) || task.xp
            });
          }, true),
          button('Delete', () => confirm('Delete this quest?')
            ? mutate('DELETE', `/api/tasks/${task.id}?confirm=true`)
            : Promise.resolve(), true));
        list.appendChild(row);
      });
    };

    const renderHabits = (habits) => {
      const grid = document.getElementById('habits');
      grid.innerHTML = '';
      habits.forEach((habit) => {
        const card = document.createElement('div');
        card.className = 'card';
        const title = document.createElement('strong');
        title.textContent = `${habit.icon} ${habit.name}`;
        const bar = document.createElement('div');
        bar.className = 'bar';
        const fill = document.createElement('div');
        fill.style.width = `${(habit.current / habit.target) * 100}%`;
        bar.appendChild(fill);
        const info = document.createElement('div');
        info.textContent = `${habit.current} / ${habit.target} ${habit.frequency === 'daily' ? 'today' : 'this week'} · 🔥 ${habit.streak}`;
        card.append(title, bar, info,
          button('✓', () => mutate('POST', `/api/habits/${habit.id}/increment`)),
          button('↺', () => mutate('POST', `/api/habits/${habit.id}/reset`), true),
          button('Delete', () => confirm('Delete this habit?')
            ? mutate('DELETE', `/api/habits/${habit.id}?confirm=true`)
            : Promise.resolve(), true));
        grid.appendChild(card);
      });
    };

    const SVG_NS = 'http://www.w3.org/2000/svg';

    const svgNode = (tag, attrs, text) => {
      const node = document.createElementNS(SVG_NS, tag);
      Object.entries(attrs).forEach(([key, value]) => node.setAttribute(key, value));
      if (text !== undefined) {
        node.textContent = text;
      }
      return node;
    };

    const chartLabel = (x, y, text) =>
      svgNode('text', { class: 'chart-label', x, y, 'text-anchor': 'middle' }, String(text));

    const renderLine = (el, points) => {
      const width = 600, height = 200, pad = 30;
      const step = points.length > 1 ? (width - pad * 2) / (points.length - 1) : 0;
      const y = (value) => height - pad - (value / 100) * (height - pad * 2);
      const path = points.map((p, i) => `${i === 0 ? 'M' : 'L'} ${pad + i * step} ${y(p.value)}`).join(' ');
      el.replaceChildren(svgNode('path', { class: 'chart-line', d: path }));
      points.forEach((p, i) => el.appendChild(chartLabel(pad + i * step, height - 8, p.label)));
    };

    const renderBars = (el, points, labelEvery) => {
      const width = 600, height = 200, pad = 30;
      const slot = (width - pad * 2) / Math.max(points.length, 1);
      el.replaceChildren();
      points.forEach((p, i) => {
        const h = (Math.min(p.value, 100) / 100) * (height - pad * 2);
        const x = pad + i * slot;
        el.appendChild(svgNode('rect', {
          class: 'chart-bar',
          x: x + 2,
          y: height - pad - h,
          width: slot - 4,
          height: h
        }));
        if (i % labelEvery === 0) {
          el.appendChild(chartLabel(x + slot / 2, height - 8, p.label));
        }
      });
    };

    const renderCharts = (charts) => {
      renderLine(document.getElementById('chart-7'), charts.last_7_days);
      renderBars(document.getElementById('chart-habits'), charts.habit_progress, 1);
      renderBars(document.getElementById('chart-30'), charts.last_30_days, 3);
    };

    const renderCalendar = (calendar) => {
      document.getElementById('month-title').textContent = calendar.title;
      const grid = document.getElementById('calendar');
      grid.innerHTML = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat']
        .map((day) => `<div class="head">${day}</div>`)
        .join('');
      for (let i = 0; i < calendar.leading_blanks; i += 1) {
        grid.appendChild(document.createElement('div'));
      }
      calendar.days.forEach((day) => {
        const cell = document.createElement('div');
        cell.className = `day ${day.bucket} ${day.is_today ? 'today' : ''}`;
        cell.innerHTML = `<div>${day.day}</div><div>${day.completion}%</div>`;
        grid.appendChild(cell);
      });
    };

    const refresh = async () => {
      const [state, stats, charts, calendar] = await Promise.all([
        api('GET', '/api/state'),
        api('GET', '/api/stats'),
        api('GET', '/api/charts'),
        api('GET', `/api/calendar?offset=${monthOffset}`)
      ]);
      renderQuests(state.tasks);
      renderHabits(state.habits);
      renderStats(stats);
      renderCharts(charts);
      renderCalendar(calendar);
    };

    const mutate = async (method, url, body) => {
      const result = await api(method, url, body);
      const gained = result.notifications
        .filter((n) => n.kind === 'xp_gained')
        .reduce((sum, n) => sum + n.xp, 0);
      setStatus(gained ? `+${gained} XP! 🎉` : 'Saved', 'ok');
      await refresh();
    };

    document.getElementById('task-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = document.getElementById('task-text').value;
      mutate('POST', '/api/tasks', {
        text,
        priority: document.getElementById('task-priority').value,
        xp: parseInt(document.getElementById('task-xp').value, 10) || 10
      })
        .then(() => { document.getElementById('task-text').value = ''; })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('habit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      mutate('POST', '/api/habits', {
        name: document.getElementById('habit-name').value,
        icon: document.getElementById('habit-icon').value,
        frequency: document.getElementById('habit-frequency').value,
        target: parseInt(document.getElementById('habit-target').value, 10) || 1
      })
        .then(() => { document.getElementById('habit-name').value = ''; })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      monthOffset -= 1;
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      monthOffset += 1;
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
