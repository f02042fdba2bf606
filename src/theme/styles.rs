//! Global CSS styles for the Split Cards Finder.
//!
//! Dark terminal palette: gold titles, cyan links and inputs.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  /* CYAN (Links, Input) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  --transition-fast: 150ms ease;
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
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  font-style: italic;
  color: var(--gold);
  margin-bottom: 1rem;
}

/* === Layout === */
.finder {
  max-width: 60rem;
  margin: 0 auto;
  padding: 2rem;
}

.finder-header {
  margin-bottom: 2rem;
}

.loading,
.no-results {
  color: var(--text-muted);
  font-style: italic;
  padding: 1rem 0;
}

/* === Filter Form === */
.cards-form__filters {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
  margin-bottom: 2rem;
}

.filter-label {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.filter-select {
  min-width: 12rem;
  padding: 0.5rem 0.75rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  transition: all var(--transition-fast);
}

.filter-select:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 0 1px var(--cyan), 0 0 20px var(--cyan-glow);
}

/* === Card List === */
.card-list {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1rem;
}

.card {
  border: 1px solid var(--void-border);
  border-radius: 8px;
  background: var(--void-lighter);
  transition: border-color var(--transition-fast);
}

.card:hover {
  border-color: var(--cyan);
}

.card__link {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 0.75rem;
  color: var(--cyan);
  text-decoration: none;
}

.card__image {
  width: 100%;
  border-radius: 4.75% / 3.5%;
}
"#;
