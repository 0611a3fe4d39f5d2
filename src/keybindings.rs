//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Bindings are looked up per [`Context`] first and then in `Global`, so the
//! same key can mean "scroll" on the page and "next image" in the viewer.
use crate::locale::Language;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    NavScrollLeft,
    NavScrollRight,
    /// Toggle the 1..=5 star filter.
    ToggleRating(u8),
    ClearRatings,
    ShowAllReviews,
    JumpToReviews,
    ShowGallery,
    ViewMainImage,
    NextImage,
    PrevImage,
    ToggleItinerary,
    ToggleDay,
    ExpandLists,
    StartAdventure,
    OpenWhatsApp,
    OpenInBrowser,
    CycleTheme,
    ShowHelp,
    Back,
    Select,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::ScrollDown => "Scroll down / next item",
            Self::ScrollUp => "Scroll up / previous item",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::Top => "Go to top",
            Self::Bottom => "Go to bottom",
            Self::NextSection => "Scroll to next section",
            Self::PrevSection => "Scroll to previous section",
            Self::NavScrollLeft => "Shift nav bar left",
            Self::NavScrollRight => "Shift nav bar right",
            Self::ToggleRating(_) => "Toggle star rating filter",
            Self::ClearRatings => "Clear rating filter",
            Self::ShowAllReviews => "Show all reviews",
            Self::JumpToReviews => "Jump to reviews",
            Self::ShowGallery => "Show all images",
            Self::ViewMainImage => "View main image full size",
            Self::NextImage => "Next image",
            Self::PrevImage => "Previous image",
            Self::ToggleItinerary => "Open / close all itinerary days",
            Self::ToggleDay => "Open / close the day in view",
            Self::ExpandLists => "View all / view less in lists",
            Self::StartAdventure => "Start your adventure",
            Self::OpenWhatsApp => "Contact us on WhatsApp",
            Self::OpenInBrowser => "Open image in browser",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
            Self::Back => "Go back / dismiss",
            Self::Select => "Select / open",
        }
    }
}

impl Action {
    /// Help-screen description in the page language.
    pub fn describe_in(self, language: Language) -> &'static str {
        if language.is_english() {
            return self.describe();
        }
        match self {
            Self::Quit => "Salir",
            Self::ScrollDown => "Bajar / siguiente elemento",
            Self::ScrollUp => "Subir / elemento anterior",
            Self::PageDown => "Página abajo",
            Self::PageUp => "Página arriba",
            Self::Top => "Ir al inicio",
            Self::Bottom => "Ir al final",
            Self::NextSection => "Ir a la siguiente sección",
            Self::PrevSection => "Ir a la sección anterior",
            Self::NavScrollLeft => "Mover la barra de secciones a la izquierda",
            Self::NavScrollRight => "Mover la barra de secciones a la derecha",
            Self::ToggleRating(_) => "Filtrar por estrellas",
            Self::ClearRatings => "Quitar filtro de calificación",
            Self::ShowAllReviews => "Ver todas las reseñas",
            Self::JumpToReviews => "Ir a las reseñas",
            Self::ShowGallery => "Ver todas las imágenes",
            Self::ViewMainImage => "Ver imagen principal en tamaño completo",
            Self::NextImage => "Imagen siguiente",
            Self::PrevImage => "Imagen anterior",
            Self::ToggleItinerary => "Abrir / cerrar todos los días",
            Self::ToggleDay => "Abrir / cerrar el día visible",
            Self::ExpandLists => "Ver todo / ver menos en listas",
            Self::StartAdventure => "Comienza tu aventura",
            Self::OpenWhatsApp => "Contáctanos por WhatsApp",
            Self::OpenInBrowser => "Abrir imagen en el navegador",
            Self::CycleTheme => "Cambiar tema",
            Self::ShowHelp => "Mostrar ayuda",
            Self::Back => "Volver / cerrar",
            Self::Select => "Seleccionar / abrir",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context: determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Page,
    Reviews,
    Gallery,
    Viewer,
}

impl Context {
    pub fn name(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Page => "Page",
            Self::Reviews => "All reviews",
            Self::Gallery => "Gallery",
            Self::Viewer => "Viewer",
        }
    }
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Terminals report Shift alongside uppercase letters and BackTab; the
    /// character already carries it, so it is dropped before lookup.
    fn normalized(self) -> Self {
        match self.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                Self::new(self.code, self.modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => self,
        }
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "BackTab", "Up", "Down", "Home", "PageDown"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeySpec::ctrl(c)),
            _ => None,
        };
    }

    let named = match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" | "shift+tab" => Some(KeyCode::BackTab),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "backspace" => Some(KeyCode::Backspace),
        "space" => Some(KeyCode::Char(' ')),
        _ => None,
    };
    if let Some(code) = named {
        return Some(KeySpec::plain(code));
    }

    if let Some(n) = s
        .strip_prefix(['F', 'f'])
        .and_then(|rest| rest.parse::<u8>().ok())
    {
        return (1..=12).contains(&n).then(|| KeySpec::plain(KeyCode::F(n)));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::char(c)),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Default bindings, in help-screen order.
const DEFAULT_BINDINGS: &[(Context, KeySpec, Action)] = &[
    // Global
    (Context::Global, KeySpec::char('q'), Action::Quit),
    (Context::Global, KeySpec::ctrl('c'), Action::Quit),
    (Context::Global, KeySpec::char('?'), Action::ShowHelp),
    (Context::Global, KeySpec::char('t'), Action::CycleTheme),
    (Context::Global, KeySpec::plain(KeyCode::Esc), Action::Back),
    // Page scrolling
    (Context::Page, KeySpec::char('j'), Action::ScrollDown),
    (Context::Page, KeySpec::plain(KeyCode::Down), Action::ScrollDown),
    (Context::Page, KeySpec::char('k'), Action::ScrollUp),
    (Context::Page, KeySpec::plain(KeyCode::Up), Action::ScrollUp),
    (Context::Page, KeySpec::ctrl('d'), Action::PageDown),
    (Context::Page, KeySpec::plain(KeyCode::PageDown), Action::PageDown),
    (Context::Page, KeySpec::char(' '), Action::PageDown),
    (Context::Page, KeySpec::ctrl('u'), Action::PageUp),
    (Context::Page, KeySpec::plain(KeyCode::PageUp), Action::PageUp),
    (Context::Page, KeySpec::plain(KeyCode::Home), Action::Top),
    (Context::Page, KeySpec::plain(KeyCode::End), Action::Bottom),
    // Section navigation
    (Context::Page, KeySpec::plain(KeyCode::Tab), Action::NextSection),
    (Context::Page, KeySpec::char('n'), Action::NextSection),
    (Context::Page, KeySpec::plain(KeyCode::BackTab), Action::PrevSection),
    (Context::Page, KeySpec::char('p'), Action::PrevSection),
    (Context::Page, KeySpec::char('['), Action::NavScrollLeft),
    (Context::Page, KeySpec::char(']'), Action::NavScrollRight),
    (Context::Page, KeySpec::char('r'), Action::JumpToReviews),
    (Context::Page, KeySpec::char('s'), Action::StartAdventure),
    // Reviews
    (Context::Page, KeySpec::char('1'), Action::ToggleRating(1)),
    (Context::Page, KeySpec::char('2'), Action::ToggleRating(2)),
    (Context::Page, KeySpec::char('3'), Action::ToggleRating(3)),
    (Context::Page, KeySpec::char('4'), Action::ToggleRating(4)),
    (Context::Page, KeySpec::char('5'), Action::ToggleRating(5)),
    (Context::Page, KeySpec::char('0'), Action::ClearRatings),
    (Context::Page, KeySpec::char('a'), Action::ShowAllReviews),
    // Itinerary and lists
    (Context::Page, KeySpec::char('i'), Action::ToggleItinerary),
    (Context::Page, KeySpec::char('d'), Action::ToggleDay),
    (Context::Page, KeySpec::char('e'), Action::ExpandLists),
    // Images and links
    (Context::Page, KeySpec::char('g'), Action::ShowGallery),
    (Context::Page, KeySpec::char('v'), Action::ViewMainImage),
    (Context::Page, KeySpec::char('w'), Action::OpenWhatsApp),
    // All-reviews overlay
    (Context::Reviews, KeySpec::char('j'), Action::ScrollDown),
    (Context::Reviews, KeySpec::plain(KeyCode::Down), Action::ScrollDown),
    (Context::Reviews, KeySpec::char('k'), Action::ScrollUp),
    (Context::Reviews, KeySpec::plain(KeyCode::Up), Action::ScrollUp),
    (Context::Reviews, KeySpec::char('a'), Action::Back),
    // Gallery overlay
    (Context::Gallery, KeySpec::char('j'), Action::ScrollDown),
    (Context::Gallery, KeySpec::plain(KeyCode::Down), Action::ScrollDown),
    (Context::Gallery, KeySpec::char('k'), Action::ScrollUp),
    (Context::Gallery, KeySpec::plain(KeyCode::Up), Action::ScrollUp),
    (Context::Gallery, KeySpec::plain(KeyCode::Enter), Action::Select),
    (Context::Gallery, KeySpec::char('g'), Action::Back),
    // Full-screen viewer
    (Context::Viewer, KeySpec::plain(KeyCode::Right), Action::NextImage),
    (Context::Viewer, KeySpec::char('l'), Action::NextImage),
    (Context::Viewer, KeySpec::plain(KeyCode::Left), Action::PrevImage),
    (Context::Viewer, KeySpec::char('h'), Action::PrevImage),
    (Context::Viewer, KeySpec::char('o'), Action::OpenInBrowser),
];

/// Registry of keybindings, supporting default bindings and config overrides.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::with_capacity(DEFAULT_BINDINGS.len()),
        };
        for &(context, key, action) in DEFAULT_BINDINGS {
            registry.bind(context, key, action);
        }
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "show_gallery").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5"). An override
    /// replaces every default key of that action, in the same contexts.
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            let mut contexts: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();
            contexts.dedup();

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, modifiers).normalized();

        self.lookup
            .get(&(context, key))
            .or_else(|| self.lookup.get(&(Context::Global, key)))
            .copied()
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    let name = name.to_lowercase();
    if let Some(n) = name
        .strip_prefix("toggle_rating_")
        .and_then(|rest| rest.parse::<u8>().ok())
    {
        return (1..=5).contains(&n).then_some(Action::ToggleRating(n));
    }

    let action = match name.as_str() {
        "quit" => Action::Quit,
        "scroll_down" | "down" => Action::ScrollDown,
        "scroll_up" | "up" => Action::ScrollUp,
        "page_down" => Action::PageDown,
        "page_up" => Action::PageUp,
        "top" => Action::Top,
        "bottom" => Action::Bottom,
        "next_section" => Action::NextSection,
        "prev_section" => Action::PrevSection,
        "nav_scroll_left" => Action::NavScrollLeft,
        "nav_scroll_right" => Action::NavScrollRight,
        "clear_ratings" => Action::ClearRatings,
        "show_all_reviews" | "all_reviews" => Action::ShowAllReviews,
        "jump_to_reviews" | "reviews" => Action::JumpToReviews,
        "show_gallery" | "gallery" => Action::ShowGallery,
        "view_main_image" => Action::ViewMainImage,
        "next_image" => Action::NextImage,
        "prev_image" => Action::PrevImage,
        "toggle_itinerary" => Action::ToggleItinerary,
        "toggle_day" => Action::ToggleDay,
        "expand_lists" => Action::ExpandLists,
        "start_adventure" | "adventure" => Action::StartAdventure,
        "open_whatsapp" | "whatsapp" => Action::OpenWhatsApp,
        "open_in_browser" | "open" => Action::OpenInBrowser,
        "cycle_theme" | "theme" => Action::CycleTheme,
        "show_help" | "help" => Action::ShowHelp,
        "back" => Action::Back,
        "select" | "enter" => Action::Select,
        _ => return None,
    };
    Some(action)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(reg: &KeybindingRegistry, key: KeySpec, ctx: Context) -> Option<Action> {
        reg.action_for_key(key.code, key.modifiers, ctx)
    }

    #[test]
    fn test_default_registry_has_quit_everywhere() {
        let reg = KeybindingRegistry::new();
        for ctx in [Context::Page, Context::Gallery, Context::Viewer] {
            assert_eq!(lookup(&reg, KeySpec::char('q'), ctx), Some(Action::Quit));
        }
    }

    #[test]
    fn test_context_specific_meaning() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            lookup(&reg, KeySpec::char('g'), Context::Page),
            Some(Action::ShowGallery)
        );
        assert_eq!(
            lookup(&reg, KeySpec::char('g'), Context::Gallery),
            Some(Action::Back)
        );
        assert_eq!(
            lookup(&reg, KeySpec::plain(KeyCode::Right), Context::Viewer),
            Some(Action::NextImage)
        );
        // Page keys don't leak into the viewer
        assert_eq!(lookup(&reg, KeySpec::char('5'), Context::Viewer), None);
    }

    #[test]
    fn test_rating_keys() {
        let reg = KeybindingRegistry::new();
        for n in 1..=5u8 {
            let c = char::from(b'0' + n);
            assert_eq!(
                lookup(&reg, KeySpec::char(c), Context::Page),
                Some(Action::ToggleRating(n))
            );
        }
        assert_eq!(
            lookup(&reg, KeySpec::char('0'), Context::Page),
            Some(Action::ClearRatings)
        );
    }

    #[test]
    fn test_shift_is_ignored_for_chars_and_backtab() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::BackTab, KeyModifiers::SHIFT, Context::Page),
            Some(Action::PrevSection)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('?'), KeyModifiers::SHIFT, Context::Page),
            Some(Action::ShowHelp)
        );
    }

    #[test]
    fn test_ctrl_modifiers() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            lookup(&reg, KeySpec::ctrl('d'), Context::Page),
            Some(Action::PageDown)
        );
        assert_eq!(
            lookup(&reg, KeySpec::ctrl('c'), Context::Viewer),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_apply_overrides_valid() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("show_gallery".to_string(), "G".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());
        assert_eq!(lookup(&reg, KeySpec::char('g'), Context::Page), None);
        assert_eq!(
            lookup(&reg, KeySpec::char('G'), Context::Page),
            Some(Action::ShowGallery)
        );
    }

    #[test]
    fn test_override_preserves_contexts() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("scroll_down".to_string(), "Ctrl+n".to_string());
        assert!(reg.apply_overrides(&overrides).is_empty());

        for ctx in [Context::Page, Context::Reviews, Context::Gallery] {
            assert_eq!(
                lookup(&reg, KeySpec::ctrl('n'), ctx),
                Some(Action::ScrollDown)
            );
            assert_eq!(lookup(&reg, KeySpec::char('j'), ctx), None);
        }
    }

    #[test]
    fn test_override_rating_by_name() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("toggle_rating_5".to_string(), "F5".to_string());
        assert!(reg.apply_overrides(&overrides).is_empty());
        assert_eq!(
            lookup(&reg, KeySpec::plain(KeyCode::F(5)), Context::Page),
            Some(Action::ToggleRating(5))
        );
        assert_eq!(
            lookup(&reg, KeySpec::char('4'), Context::Page),
            Some(Action::ToggleRating(4))
        );
    }

    #[test]
    fn test_apply_overrides_warnings() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("nonexistent_action".to_string(), "q".to_string());
        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Unknown action"));

        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+Alt+Shift+Q".to_string());
        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cannot parse key"));
    }

    #[test]
    fn test_parse_key_string() {
        assert_eq!(parse_key_string("Enter"), Some(KeySpec::plain(KeyCode::Enter)));
        assert_eq!(parse_key_string("esc"), Some(KeySpec::plain(KeyCode::Esc)));
        assert_eq!(
            parse_key_string("Shift+Tab"),
            Some(KeySpec::plain(KeyCode::BackTab))
        );
        assert_eq!(parse_key_string("space"), Some(KeySpec::char(' ')));
        assert_eq!(parse_key_string("F12"), Some(KeySpec::plain(KeyCode::F(12))));
        assert_eq!(parse_key_string("F13"), None);
        assert_eq!(parse_key_string("f"), Some(KeySpec::char('f')));
        assert_eq!(parse_key_string("Ctrl+d"), Some(KeySpec::ctrl('d')));
        assert_eq!(parse_key_string("ñ"), Some(KeySpec::char('ñ')));
        assert_eq!(parse_key_string("qq"), None);
    }

    #[test]
    fn test_parse_action_name_ratings() {
        assert_eq!(
            parse_action_name("toggle_rating_3"),
            Some(Action::ToggleRating(3))
        );
        assert_eq!(parse_action_name("toggle_rating_6"), None);
        assert_eq!(parse_action_name("Help"), Some(Action::ShowHelp));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key(&KeySpec::char('q')), "q");
        assert_eq!(format_key(&KeySpec::ctrl('d')), "Ctrl+d");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::BackTab)), "Shift+Tab");
        assert_eq!(format_key(&KeySpec::char(' ')), "Space");
    }

    #[test]
    fn test_all_bindings_cover_every_context() {
        let reg = KeybindingRegistry::new();
        let bindings = reg.all_bindings();
        for ctx in [
            Context::Global,
            Context::Page,
            Context::Reviews,
            Context::Gallery,
            Context::Viewer,
        ] {
            assert!(bindings.iter().any(|(c, _, _, _)| *c == ctx));
        }
    }
}
