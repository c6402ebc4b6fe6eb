//! CSS styles for the info page.
//!
//! The complete stylesheet is embedded into the rendered document, so
//! the output is a single self-contained HTML file.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use kuro_page::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page.
///
/// This CSS provides:
/// - Base typography and the soft gradient backdrop
/// - Feature tile styling with hover emphasis
/// - Titled list sections (commands, tech stack)
/// - Entrance animations (tiles fade in staggered, lists slide in)
pub const PAGE_CSS: &str = r#"
:root {
    --bg-from: #f9fafb;
    --bg-to: #eff6ff;
    --card-bg: #ffffff;
    --card-bg-hover: #eff6ff;
    --text-strong: #1f2937;
    --text-body: #4b5563;
    --accent-from: #2563eb;
    --accent-to: #9333ea;
    --snippet-bg: #f3f4f6;
    --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    --font-sans: system-ui, -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
    --container-max: 1152px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: linear-gradient(135deg, var(--bg-from), var(--bg-to));
    color: var(--text-body);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

/* Layout */
.page {
    min-height: 100vh;
    padding: 48px 16px;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
}

/* Header */
.page-header {
    text-align: center;
    margin-bottom: 48px;
    animation: fadeIn 0.8s ease-out both;
}

.page-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 16px;
    background: linear-gradient(90deg, var(--accent-from), var(--accent-to));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.page-tagline {
    font-size: 1.25rem;
    margin: 0;
    animation: slideUp 0.8s ease-out both;
}

/* Feature tiles */
.feature-grid {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 24px;
}

.card-slot {
    opacity: 0;
    animation: fadeIn 0.6s ease-out forwards;
}

.info-card {
    background: var(--card-bg);
    border-radius: 8px;
    box-shadow: var(--shadow-md);
    padding: 24px;
    height: 100%;
    transition: all 0.3s ease-in-out;
}

/* is-hovered follows the card's hover flag; :hover covers the no-script build */
.info-card.is-hovered,
.info-card:hover {
    transform: translateY(-8px) scale(1.05);
    box-shadow: var(--shadow-xl);
    background: linear-gradient(135deg, var(--card-bg), var(--card-bg-hover));
}

.info-card-head {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 16px;
}

.info-card-icon {
    font-size: 1.875rem;
    transition: transform 0.3s ease-in-out;
}

.info-card.is-hovered .info-card-icon,
.info-card:hover .info-card-icon {
    transform: scale(1.25);
}

.info-card-title {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--text-strong);
    margin: 0;
}

.info-card-description {
    margin: 0;
}

/* List sections */
.list-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 32px;
    margin-top: 32px;
}

.enter-left {
    animation: slideInLeft 0.8s ease-out both;
}

.enter-right {
    animation: slideInRight 0.8s ease-out both;
}

.feature-section {
    background: var(--card-bg);
    border-radius: 8px;
    box-shadow: var(--shadow-md);
    padding: 24px;
    height: 100%;
    transition: box-shadow 0.3s;
}

.feature-section:hover {
    box-shadow: var(--shadow-xl);
}

.feature-section-title {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--text-strong);
    margin: 0 0 16px;
}

.feature-section-list {
    margin: 0;
    padding-left: 1.25rem;
}

.feature-section-list li {
    margin-bottom: 8px;
    transition: all 0.3s;
}

.feature-section-list li:hover {
    transform: translateX(8px);
    color: var(--accent-from);
}

/* Getting Started */
.getting-started {
    background: var(--card-bg);
    border-radius: 8px;
    box-shadow: var(--shadow-md);
    padding: 32px;
    margin-top: 64px;
    transition: box-shadow 0.5s;
}

.getting-started:hover {
    box-shadow: var(--shadow-xl);
}

.getting-started h2 {
    font-size: 1.5rem;
    font-weight: 600;
    color: var(--text-strong);
    margin: 0 0 24px;
}

.getting-started h3 {
    font-size: 1.25rem;
    font-weight: 500;
    color: var(--text-strong);
    margin: 0 0 8px;
}

.install-snippet {
    background: var(--snippet-bg);
    border-radius: 8px;
    padding: 16px;
    margin-top: 16px;
    transition: transform 0.3s;
}

.install-snippet:hover {
    transform: scale(1.05);
}

.install-snippet code {
    font-size: 0.875rem;
}

/* Entrance animations */
@keyframes fadeIn {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes slideUp {
    from { opacity: 0; transform: translateY(24px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes slideInLeft {
    from { opacity: 0; transform: translateX(-32px); }
    to { opacity: 1; transform: translateX(0); }
}

@keyframes slideInRight {
    from { opacity: 0; transform: translateX(32px); }
    to { opacity: 1; transform: translateX(0); }
}

/* Responsive */
@media (max-width: 1024px) {
    .feature-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (max-width: 640px) {
    .feature-grid, .list-grid { grid-template-columns: 1fr; }
    .page-title { font-size: 1.875rem; }
}
"#;

/// Content-Security-Policy for the rendered page. The page ships no
/// scripts; only the inline stylesheet and data URIs are allowed.
pub const CSP: &str =
    "default-src 'none'; img-src data:; style-src 'unsafe-inline'; connect-src 'none';";
