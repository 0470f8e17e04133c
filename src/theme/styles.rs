//! Global CSS styles for Keepsake.
//!
//! Warm paper-and-ribbon aesthetic; card accents come from the catalog,
//! everything else lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #fff6f2;
  --paper-deep: #ffe9e4;
  --paper-border: #f3d5cf;

  /* ROSE (Hearts, Titles, Primary Accent) */
  --rose: #ff3b5c;
  --rose-deep: #e63946;
  --rose-glow: rgba(255, 59, 92, 0.35);

  /* DUSK BLUE (Secondary Accent) */
  --dusk: #7db8c5;
  --dusk-light: #a8d8ea;

  /* TEXT */
  --text-primary: #3d2b2e;
  --text-secondary: rgba(61, 43, 46, 0.7);
  --text-on-accent: #fffdfd;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Avenir Next', 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-loader: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Loading Screen === */
.loader-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: var(--paper-deep);
  opacity: 1;
  transition: opacity var(--transition-loader);
}

.loader-overlay.fading {
  opacity: 0;
}

.loader-heart {
  font-size: var(--text-3xl);
  color: var(--rose);
  animation: pulse 1.2s ease-in-out infinite;
}

.loader-text {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  letter-spacing: 0.2em;
  color: var(--text-secondary);
}

@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.25); }
}

/* === Page Layout === */
.gallery-page {
  min-height: 100vh;
  padding: 2rem clamp(1rem, 6vw, 4rem);
  overflow-y: auto;
}

.gallery-page.modal-open {
  overflow: hidden;
}

.gallery-header {
  text-align: center;
  margin-bottom: 2.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--rose-deep);
  letter-spacing: 0.1em;
}

.tagline {
  font-size: var(--text-base);
  color: var(--text-secondary);
  font-style: italic;
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-primary);
}

.gallery-waiting {
  text-align: center;
  padding: 4rem 0;
  color: var(--text-secondary);
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}

.card-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  aspect-ratio: 3 / 4;
  border-radius: 18px;
  cursor: pointer;
  color: var(--text-on-accent);
  box-shadow: 0 8px 24px rgba(61, 43, 46, 0.18);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
  outline-offset: 3px;
}

.card-tile:hover {
  transform: translateY(-4px);
  box-shadow: 0 14px 32px rgba(61, 43, 46, 0.25);
}

.card-tile:focus-visible {
  outline: 3px solid var(--rose);
}

.card-tile.pressed {
  transform: scale(0.95);
}

.card-tile__heart {
  font-size: var(--text-3xl);
  text-shadow: 0 2px 10px rgba(0, 0, 0, 0.2);
}

.card-tile__label {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  letter-spacing: 0.05em;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: rgba(61, 43, 46, 0.55);
}

.expanded-card {
  position: relative;
  width: min(480px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  padding: 2.5rem 2rem 2rem;
  border-radius: 22px;
  color: var(--text-on-accent);
  box-shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
}

.modal-close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.25);
  color: var(--text-on-accent);
  font-size: var(--text-lg);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.modal-close-btn:hover,
.modal-close-btn:focus-visible {
  background: rgba(255, 255, 255, 0.45);
}

/* === Picture Region === */
.content-image-container {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 200px;
  margin-bottom: 1.5rem;
  border-radius: 14px;
  background: rgba(255, 255, 255, 0.15);
  cursor: pointer;
  overflow: hidden;
}

.modal-image {
  display: block;
  width: 100%;
  max-height: 300px;
  object-fit: cover;
}

.image-placeholder {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  color: rgba(255, 255, 255, 0.85);
}

.image-placeholder__icon {
  font-size: var(--text-2xl);
}

.image-placeholder__hint {
  font-size: var(--text-sm);
  letter-spacing: 0.05em;
}

/* === Editable Content === */
.editable {
  cursor: text;
  border-radius: 8px;
  padding: 0.2rem 0.4rem;
  transition: background var(--transition-fast);
}

.editable:hover {
  background: rgba(255, 255, 255, 0.18);
}

.modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 500;
  margin-bottom: 0.75rem;
}

.modal-message {
  font-size: var(--text-base);
  line-height: 1.7;
  white-space: pre-wrap;
}

.modal-title-input,
.modal-message-input {
  width: 100%;
  border: none;
  border-radius: 8px;
  padding: 0.2rem 0.4rem;
  background: rgba(255, 255, 255, 0.25);
  color: var(--text-on-accent);
  font-family: inherit;
}

.modal-title-input {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 500;
  margin-bottom: 0.75rem;
}

.modal-message-input {
  font-size: var(--text-base);
  line-height: 1.7;
  resize: vertical;
}

.modal-title-input:focus,
.modal-message-input:focus {
  outline: 2px solid rgba(255, 255, 255, 0.7);
}
"#;
