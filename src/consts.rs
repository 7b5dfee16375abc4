//! Fixed document contract and default tunables for the portfolio page.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the selected theme name.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

// ── Theme ───────────────────────────────────────────────────────

/// Theme selector buttons.
pub const THEME_BUTTON_SELECTOR: &str = ".theme-btn";

/// Attribute naming the theme a selector button applies.
pub const THEME_ATTR: &str = "data-theme";

/// Marker class for the selected theme button and the current nav link.
pub const ACTIVE_CLASS: &str = "active";

// ── Navigation ──────────────────────────────────────────────────

/// Desktop and mobile navigation links.
pub const NAV_LINK_SELECTOR: &str = ".nav-link, .mobile-nav-link";

/// Sections tracked for nav highlighting.
pub const SECTION_SELECTOR: &str = "section[id]";

pub const MOBILE_MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const MOBILE_MENU_SELECTOR: &str = ".mobile-menu";

/// Class that opens the mobile menu panel.
pub const MOBILE_MENU_OPEN_CLASS: &str = "show";

/// Hero call-to-action that jumps to the projects section.
pub const HERO_PROJECTS_BUTTON_SELECTOR: &str = ".hero-buttons .btn-primary";
pub const PROJECTS_SECTION_ID: &str = "projects";

/// Background layer moved by the hero parallax.
pub const PARALLAX_SELECTOR: &str = ".hero-bg-overlay";

/// Height of the sticky header, in CSS pixels.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Section that is active before any intersection report arrives.
pub const INITIAL_SECTION: &str = "home";

/// Fraction of a section that must be visible to activate it.
pub const SECTION_THRESHOLD: f64 = 0.3;

/// Viewport inset applied above and below when tracking sections.
pub const SECTION_MARGIN_PX: f64 = 80.0;

/// Viewport width at which the mobile menu is force-closed on resize.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Hero overlay translation per pixel scrolled.
pub const PARALLAX_SPEED: f64 = 0.5;

// ── Entrance animation ──────────────────────────────────────────

/// Content blocks that fade in on first sight.
pub const ENTRANCE_SELECTORS: &[&str] = &[
    ".section-header",
    ".about-content",
    ".timeline-item",
    ".skill-category",
    ".project-card",
    ".cert-type-card",
    ".contact-form-container",
];

pub const ENTRANCE_THRESHOLD: f64 = 0.1;
pub const ENTRANCE_OFFSET_PX: f64 = 30.0;
pub const ENTRANCE_DURATION_MS: u32 = 800;

// ── Skill bars ──────────────────────────────────────────────────

pub const SKILLS_SECTION_SELECTOR: &str = ".skills-section";
pub const SKILL_BAR_SELECTOR: &str = ".skill-fill";

/// Attribute carrying a bar's final CSS width, e.g. `"85%"`.
pub const SKILL_WIDTH_ATTR: &str = "data-width";

pub const SKILLS_THRESHOLD: f64 = 0.5;
pub const SKILLS_BOTTOM_MARGIN_PX: f64 = 100.0;
pub const SKILL_FILL_DELAY_MS: u32 = 200;

// ── Images ──────────────────────────────────────────────────────

pub const AVATAR_IMAGE_SELECTOR: &str = ".avatar-img";
pub const AVATAR_FALLBACK_SELECTOR: &str = ".avatar-fallback";
pub const CERTIFICATE_IMAGE_SELECTOR: &str = ".certificate-img";

/// Class a certificate image's next sibling must carry to act as its fallback.
pub const CERTIFICATE_FALLBACK_CLASS: &str = "certificate-fallback";

// ── Contact form & toast ────────────────────────────────────────

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const TOAST_ID: &str = "toast";
pub const TOAST_TITLE_SELECTOR: &str = ".toast-title";
pub const TOAST_DESCRIPTION_SELECTOR: &str = ".toast-description";
pub const TOAST_ICON_SELECTOR: &str = ".toast-icon i";

/// Class that makes the toast visible.
pub const TOAST_VISIBLE_CLASS: &str = "show";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 5000;

// ── Configuration ───────────────────────────────────────────────

/// `document.readyState` while the markup is still being parsed.
pub const LOADING_STATE: &str = "loading";

/// Optional `<script type="application/json">` element overriding [`crate::config::SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";
