pub fn render_index(daily_count: u64, relative: Option<&str>) -> String {
    INDEX_HTML
        .replace("{{COUNT}}", &daily_count.to_string())
        .replace("{{RELATIVE}}", relative.unwrap_or("not yet"))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tomato Watering</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --leaf: #2d7a4b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(560px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .plant {
      font-size: 6rem;
      line-height: 1;
      user-select: none;
    }

    .plant.happy {
      animation: bounce 500ms ease infinite alternate;
    }

    .status-text {
      font-size: 1.05rem;
      color: var(--leaf);
      min-height: 1.3em;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .duration {
      display: grid;
      gap: 8px;
      text-align: left;
    }

    .duration label {
      font-size: 0.9rem;
      color: #6b645d;
    }

    input[type="range"] {
      width: 100%;
      accent-color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1.05rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      cursor: wait;
      opacity: 0.7;
    }

    button.watering {
      animation: pulse 900ms ease infinite;
    }

    .message {
      font-size: 0.95rem;
      min-height: 1.3em;
      color: #6b645d;
    }

    .message.success {
      color: var(--leaf);
    }

    .message.error {
      color: #c63b2b;
    }

    .rainbow {
      position: fixed;
      top: 18%;
      left: 50%;
      transform: translateX(-50%);
      font-size: 4rem;
      pointer-events: none;
      animation: floatUp 2s ease forwards;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes bounce {
      from {
        transform: translateY(0);
      }
      to {
        transform: translateY(-12px);
      }
    }

    @keyframes pulse {
      0%, 100% {
        box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      }
      50% {
        box-shadow: 0 10px 36px rgba(255, 107, 74, 0.55);
      }
    }

    @keyframes floatUp {
      from {
        opacity: 1;
      }
      to {
        opacity: 0;
        transform: translateX(-50%) translateY(-60px);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Tomato Watering</h1>
      <p class="subtitle">Give the plant a drink and it will remember.</p>
    </header>

    <div id="tomato" class="plant">&#127813;</div>
    <div id="statusText" class="status-text">Doing great!</div>

    <section class="panel">
      <div class="stat">
        <span class="label">Last watered</span>
        <span id="lastWatered" class="value">{{RELATIVE}}</span>
      </div>
      <div class="stat">
        <span class="label">Today</span>
        <span id="todayCount" class="value">{{COUNT}}&times;</span>
      </div>
    </section>

    <div class="duration">
      <label for="duration">Duration: <span id="durationValue">10</span> seconds</label>
      <input type="range" id="duration" min="1" max="30" value="10" />
    </div>

    <button id="waterButton" type="button"><span class="button-text">Water the plant</span></button>

    <div id="message" class="message"></div>
  </main>

  <script>
    const waterButton = document.getElementById('waterButton');
    const buttonText = waterButton.querySelector('.button-text');
    const tomato = document.getElementById('tomato');
    const lastWateredEl = document.getElementById('lastWatered');
    const todayCountEl = document.getElementById('todayCount');
    const messageEl = document.getElementById('message');
    const statusTextEl = document.getElementById('statusText');
    const durationSlider = document.getElementById('duration');
    const durationValue = document.getElementById('durationValue');

    let todayCount = {{COUNT}};
    let lastWateredDate = null;

    const showMessage = (text, type) => {
      messageEl.textContent = text;
      messageEl.className = `message ${type}`;
    };

    const clearMessage = () => {
      messageEl.textContent = '';
      messageEl.className = 'message';
    };

    const setTodayCount = (count) => {
      todayCount = count;
      todayCountEl.textContent = `${count}×`;
    };

    const updateRelativeTime = () => {
      if (!lastWateredDate) {
        return;
      }

      const diff = Date.now() - lastWateredDate.getTime();
      const minutes = Math.floor(diff / 60000);
      const hours = Math.floor(diff / 3600000);

      if (minutes < 1) {
        lastWateredEl.textContent = 'just now';
      } else if (minutes < 60) {
        lastWateredEl.textContent = `${minutes} minute${minutes === 1 ? '' : 's'} ago`;
      } else if (hours < 24) {
        lastWateredEl.textContent = `${hours} hour${hours === 1 ? '' : 's'} ago`;
      } else {
        const days = Math.floor(hours / 24);
        lastWateredEl.textContent = `${days} day${days === 1 ? '' : 's'} ago`;
      }
    };

    const showRainbowEffect = () => {
      const rainbow = document.createElement('div');
      rainbow.className = 'rainbow';
      rainbow.textContent = '\u{1F308}';
      document.body.appendChild(rainbow);
      setTimeout(() => rainbow.remove(), 2000);
    };

    const onWateringSuccess = (message) => {
      waterButton.classList.remove('watering');
      tomato.classList.add('happy');
      showMessage(message || 'Watering complete! \u{1F389}', 'success');
      statusTextEl.textContent = 'Thank you! Full of energy!';

      setTodayCount(todayCount + 1);
      lastWateredDate = new Date();
      updateRelativeTime();
      showRainbowEffect();

      setTimeout(() => {
        tomato.classList.remove('happy');
        waterButton.disabled = false;
        buttonText.textContent = 'Water the plant';
        clearMessage();
        statusTextEl.textContent = 'Doing great!';
      }, 3000);
    };

    const onWateringError = (message) => {
      waterButton.classList.remove('watering');
      waterButton.disabled = false;
      buttonText.textContent = 'Water the plant';
      showMessage(message || 'Something went wrong', 'error');
      statusTextEl.textContent = 'Doing great!';

      setTimeout(() => clearMessage(), 3000);
    };

    const waterPlants = async () => {
      if (waterButton.disabled) {
        return;
      }

      const duration = parseInt(durationSlider.value, 10);

      waterButton.disabled = true;
      waterButton.classList.add('watering');
      buttonText.textContent = 'Watering...';
      showMessage(`Watering for ${duration} seconds \u{1F4A7}`, 'info');
      statusTextEl.textContent = 'Enjoying the water!';

      try {
        const res = await fetch('/api/water', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ duration })
        });
        const data = await res.json();
        if (data.success) {
          onWateringSuccess(data.message);
        } else {
          onWateringError(data.message);
        }
      } catch (err) {
        onWateringError('Connection error, please try again');
      }
    };

    const updateStatus = async () => {
      try {
        const res = await fetch('/api/status');
        const data = await res.json();

        if (data.last_watered_relative) {
          lastWateredEl.textContent = data.last_watered_relative;
        }
        if (data.last_watered) {
          lastWateredDate = new Date(data.last_watered);
        }
        setTodayCount(data.daily_count);
      } catch (err) {
        console.error('status fetch failed:', err);
      }
    };

    waterButton.addEventListener('click', () => {
      waterPlants();
    });

    durationSlider.addEventListener('input', (event) => {
      durationValue.textContent = event.target.value;
    });

    updateStatus();
    setInterval(updateRelativeTime, 60000);
  </script>
</body>
</html>
"#;
