//! Global CSS styles for Folio.
//!
//! Zinc neutrals with a red accent, light and dark aware.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-raised: #ffffff;
  --surface-hover: #f4f4f5;
  --backdrop: rgba(0, 0, 0, 0.5);

  /* Text */
  --text-strong: #27272a;
  --text-body: #52525b;
  --text-muted: #71717a;

  /* Accent (tags, link hover) */
  --accent: #991b1b;
  --accent-soft: #fee2e2;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --text-xs: 0.75rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;

  /* Transitions */
  --transition-normal: 300ms ease;
}

@media (prefers-color-scheme: dark) {
  :root {
    --surface: #09090b;
    --surface-raised: #18181b;
    --surface-hover: #18181b;
    --text-strong: #ffffff;
    --text-body: #d4d4d8;
    --text-muted: #a1a1aa;
    --accent: #ef4444;
    --accent-soft: rgba(153, 27, 27, 0.3);
  }
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-body);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page === */
.page {
  max-width: 960px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--text-strong);
  margin-bottom: 2rem;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 0.5rem;
}

.empty-catalog {
  color: var(--text-muted);
  font-style: italic;
}

/* === Project Card === */
.project-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  cursor: pointer;
  transition: background var(--transition-normal);
}

.project-card:hover,
.project-card:focus-visible,
.project-card--active {
  background: var(--surface-hover);
  outline: none;
}

.project-card__title {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--text-strong);
  margin-top: 1rem;
}

.project-card__description {
  font-weight: 300;
  line-height: 1.75;
  color: var(--text-muted);
  margin-top: 1rem;
}

.project-card__links {
  display: flex;
  gap: 1.5rem;
  font-weight: 500;
}

/* === Technology Tags === */
.tech-tags {
  display: flex;
  gap: 0.5rem;
}

.tech-tags--strip {
  overflow-x: auto;
  padding: 0.5rem 0;
}

.tech-tags--wrap {
  flex-wrap: wrap;
  margin-bottom: 1.5rem;
}

.tech-tag {
  display: inline-flex;
  align-items: center;
  white-space: pre;
  padding: 0.375rem 0.75rem;
  border-radius: 9999px;
  font-size: var(--text-xs);
  font-weight: 500;
  background: var(--accent-soft);
  color: var(--accent);
}

/* === Links === */
.link-item {
  display: flex;
  gap: 0.5rem;
  align-items: center;
  color: var(--text-body);
  text-decoration: none;
  transition: color var(--transition-normal);
}

.link-item:hover {
  color: var(--accent);
}

.link-item--compact {
  margin-top: 1rem;
  font-size: var(--text-xs);
}

.link-icon {
  width: 1.5rem;
  height: 1.5rem;
}

/* === Detail Overlay === */
.overlay-backdrop {
  position: fixed;
  inset: 0;
  background: var(--backdrop);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  z-index: 50;
}

.overlay-panel {
  position: relative;
  background: var(--surface-raised);
  border-radius: 0.5rem;
  max-width: 42rem;
  width: 100%;
  max-height: 90vh;
  overflow: hidden;
  outline: none;
}

.overlay-body {
  padding: 1.5rem;
  max-height: 90vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.overlay-heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.overlay-icon {
  font-size: var(--text-3xl);
}

.overlay-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--text-strong);
}

.overlay-section {
  margin-bottom: 1.5rem;
}

.overlay-section__title {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--text-strong);
  margin-bottom: 0.5rem;
}

.overlay-description {
  line-height: 1.75;
}

.highlight-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.highlight {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.highlight__bullet {
  color: var(--accent);
}

.overlay-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

/* === Icon Buttons === */
.icon-btn {
  background: transparent;
  border: none;
  cursor: pointer;
  color: var(--text-muted);
}

.icon-btn:hover {
  color: var(--text-strong);
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 10;
}

.close-btn__icon {
  width: 1.5rem;
  height: 1.5rem;
}
"#;
