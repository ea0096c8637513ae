//! Global CSS styles for ruleIQ.
//!
//! Colors come from the token table, injected as `:root` custom properties
//! (`--brand-primary`, `--text-secondary`, ...) ahead of these rules.

pub const GLOBAL_STYLES: &str = r#"
/* === Non-color Properties === */
:root {
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;

  --radius-sm: 6px;
  --radius-md: 10px;

  --panel-width: min(18rem, 85vw);
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
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
  background: var(--surface-raised);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: var(--text-link);
  text-decoration: none;
}

/* === App Shell === */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.top-bar {
  position: sticky;
  top: 0;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  background: var(--surface-base);
  border-bottom: 1px solid var(--surface-border);
  z-index: 10;
}

.env-badge {
  margin-left: auto;
  padding: 0.125rem 0.5rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
  letter-spacing: 0.05em;
  color: var(--text-inverse);
  background: var(--semantic-warning);
}

.page {
  flex: 1;
  padding: 1.5rem 1rem;
}

/* === Brand Mark === */
.brand-mark {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--brand-primary);
}

.brand-glyph {
  display: inline-flex;
  color: var(--brand-secondary);
}

.brand-name {
  font-size: var(--text-lg);
  font-weight: 700;
  letter-spacing: -0.01em;
}

/* === Icon Buttons === */
.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: var(--radius-sm);
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.icon-btn:hover {
  background: var(--surface-sunken);
  color: var(--text-primary);
}

.close-btn {
  margin-left: auto;
}

/* === Mobile Navigation Panel === */
.mobile-nav-backdrop {
  position: fixed;
  inset: 0;
  background: color-mix(in srgb, var(--surface-overlay) 55%, transparent);
  z-index: 900;
  animation: fade-in var(--transition-normal);
}

.mobile-nav-panel {
  position: fixed;
  top: 0;
  bottom: 0;
  left: 0;
  width: var(--panel-width);
  display: flex;
  flex-direction: column;
  background: var(--surface-base);
  border-right: 1px solid var(--surface-border);
  box-shadow: 0 0 24px color-mix(in srgb, var(--surface-overlay) 20%, transparent);
  z-index: 1000;
  outline: none;
  animation: slide-in var(--transition-normal);
}

.mobile-nav-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem;
  border-bottom: 1px solid var(--surface-border);
}

.mobile-nav-list {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  padding: 0.75rem;
}

.mobile-nav-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.625rem 0.75rem;
  border-radius: var(--radius-sm);
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 500;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.mobile-nav-link:hover {
  background: var(--surface-sunken);
  color: var(--text-primary);
}

.mobile-nav-link.active {
  background: var(--brand-primary);
  color: var(--text-inverse);
}

.mobile-nav-icon {
  display: inline-flex;
  color: var(--text-muted);
}

.mobile-nav-link.active .mobile-nav-icon {
  color: var(--accent-300);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-in {
  from { transform: translateX(-100%); }
  to { transform: translateX(0); }
}

/* === Pages === */
.page-header {
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--brand-primary);
}

.page-summary {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.section-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(9rem, 1fr));
  gap: 0.75rem;
}

.section-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem;
  border: 1px solid var(--surface-border);
  border-radius: var(--radius-md);
  background: var(--surface-base);
  color: var(--text-primary);
}

.section-card:hover {
  border-color: var(--accent-400);
}

.section-card-icon {
  color: var(--brand-accent);
}

.section-card-title {
  font-weight: 600;
}

.back-link {
  font-size: var(--text-sm);
}

/* === Empty States === */
.empty-state {
  padding: 2rem 1rem;
  border: 1px dashed var(--surface-border);
  border-radius: var(--radius-md);
  text-align: center;
  color: var(--text-secondary);
}

.empty-hint {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid var(--accent-500);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
