//! Language selection and localized UI strings.
//!
//! The active [`Language`] is resolved once at startup (CLI flag or config
//! file) and threaded through everything that renders text. Nothing here
//! re-derives it per frame.

use crate::content::Image;
use std::borrow::Cow;
use std::fmt;

/// Supported page languages. Spanish is the primary language: image alt text
/// is authored in Spanish first and English is an optional translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Parse an ISO 639-1 code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Code sent to the itinerary endpoint (`?lang=`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    pub fn is_english(self) -> bool {
        self == Self::En
    }

    /// Localized UI strings for this language.
    pub fn strings(self) -> &'static UiStrings {
        match self {
            Self::Es => &ES_STRINGS,
            Self::En => &EN_STRINGS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Pick the alt text for an image in the given language.
///
/// English falls back to the primary (Spanish) text when the translation is
/// missing or blank.
pub fn alt_text(image: &Image, language: Language) -> &str {
    match language {
        Language::Es => &image.alt_text,
        Language::En => image
            .alt_text_en
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&image.alt_text),
    }
}

/// Alt text for the image at `position` (0-based) in the gallery, with a
/// numbered "Trip scene N" when the image carries none.
pub fn image_label(image: &Image, language: Language, position: usize) -> Cow<'_, str> {
    let alt = alt_text(image, language);
    if alt.trim().is_empty() {
        Cow::Owned(format!("{} {}", language.strings().trip_scene, position + 1))
    } else {
        Cow::Borrowed(alt)
    }
}

/// Build a `wa.me` deep link with a pre-filled message.
///
/// A single leading `+` is stripped from the phone number; the message is
/// percent-encoded.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let phone = phone.trim();
    let phone = phone.strip_prefix('+').unwrap_or(phone);
    format!(
        "https://wa.me/{}?text={}",
        phone,
        urlencoding::encode(message)
    )
}

/// Format an integer with en-US digit grouping (`1234567` → `1,234,567`).
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fixed UI copy, one table per language.
#[derive(Debug)]
pub struct UiStrings {
    pub days: &'static str,
    pub reviews_word: &'static str,
    pub from: &'static str,
    pub loading_images: &'static str,
    pub images_failed: &'static str,
    pub images_unavailable: &'static str,
    pub view_all_images: &'static str,
    pub trip_photos: &'static str,
    pub full_size_view: &'static str,
    pub main_image: &'static str,
    pub overview_image: &'static str,
    pub itinerary_image: &'static str,
    pub adventure_image: &'static str,
    pub view_all: &'static str,
    pub view_less: &'static str,
    pub day: &'static str,
    pub accommodation: &'static str,
    pub meals: &'static str,
    pub transport: &'static str,
    pub included_activities: &'static str,
    pub optional_activities: &'static str,
    pub special_info: &'static str,
    pub filter_by_rating: &'static str,
    pub star: &'static str,
    pub stars: &'static str,
    pub read_all_reviews: &'static str,
    pub all_reviews: &'static str,
    pub no_reviews_match: &'static str,
    pub opened_in_browser: &'static str,
    pub open_failed: &'static str,
    pub loading_itinerary: &'static str,
    pub trip_scene: &'static str,
    pub filter_cleared: &'static str,
    pub help_title: &'static str,
    pub help_general: &'static str,
    pub help_moving: &'static str,
    pub help_sections: &'static str,
    pub help_reviews: &'static str,
    pub help_itinerary: &'static str,
    pub help_photos: &'static str,
    pub help_booking: &'static str,
    pub help_close: &'static str,
}

static EN_STRINGS: UiStrings = UiStrings {
    days: "days",
    reviews_word: "reviews",
    from: "From",
    loading_images: "Loading images...",
    images_failed: "Unable to load images at this time",
    images_unavailable: "Images unavailable",
    view_all_images: "View all images",
    trip_photos: "Trip Photos",
    full_size_view: "Full size view",
    main_image: "Main trip image",
    overview_image: "Overview illustration",
    itinerary_image: "Itinerary theme",
    adventure_image: "Scenic view of Lake Titicaca, Bolivia",
    view_all: "View all",
    view_less: "View less",
    day: "Day",
    accommodation: "Accommodation",
    meals: "Meals",
    transport: "Transport",
    included_activities: "Included activities",
    optional_activities: "Optional activities",
    special_info: "Special information",
    filter_by_rating: "Filter by rating",
    star: "star",
    stars: "stars",
    read_all_reviews: "Read all reviews",
    all_reviews: "All Reviews",
    no_reviews_match: "No reviews match the selected ratings",
    opened_in_browser: "Opened in browser",
    open_failed: "Could not open browser",
    loading_itinerary: "Loading itinerary...",
    trip_scene: "Trip scene",
    filter_cleared: "Showing all ratings",
    help_title: "Keyboard shortcuts",
    help_general: "General",
    help_moving: "Moving around",
    help_sections: "Sections",
    help_reviews: "Reviews",
    help_itinerary: "Itinerary",
    help_photos: "Photos",
    help_booking: "Booking",
    help_close: "? or Esc to close",
};

static ES_STRINGS: UiStrings = UiStrings {
    days: "días",
    reviews_word: "reseñas",
    from: "Desde",
    loading_images: "Cargando imágenes...",
    images_failed: "No se pudieron cargar las imágenes en este momento",
    images_unavailable: "Imágenes no disponibles",
    view_all_images: "Ver todas las imágenes",
    trip_photos: "Fotos del Viaje",
    full_size_view: "Vista de tamaño completo",
    main_image: "Imagen principal del viaje",
    overview_image: "Ilustración de resumen",
    itinerary_image: "Tema del itinerario",
    adventure_image: "Vista panorámica del Lago Titicaca, Bolivia",
    view_all: "Ver todo",
    view_less: "Ver menos",
    day: "Día",
    accommodation: "Alojamiento",
    meals: "Comidas",
    transport: "Transporte",
    included_activities: "Actividades incluidas",
    optional_activities: "Actividades opcionales",
    special_info: "Información especial",
    filter_by_rating: "Filtrar por calificación",
    star: "estrella",
    stars: "estrellas",
    read_all_reviews: "Leer todas las reseñas",
    all_reviews: "Todas las Reseñas",
    no_reviews_match: "Ninguna reseña coincide con las calificaciones seleccionadas",
    opened_in_browser: "Abierto en el navegador",
    open_failed: "No se pudo abrir el navegador",
    loading_itinerary: "Cargando itinerario...",
    trip_scene: "Escena del viaje",
    filter_cleared: "Mostrando todas las calificaciones",
    help_title: "Atajos de teclado",
    help_general: "General",
    help_moving: "Desplazamiento",
    help_sections: "Secciones",
    help_reviews: "Reseñas",
    help_itinerary: "Itinerario",
    help_photos: "Fotos",
    help_booking: "Reservas",
    help_close: "? o Esc para cerrar",
};

impl UiStrings {
    /// "1 star" / "3 stars" in the active language.
    pub fn star_label(&self, count: u8) -> String {
        let word = if count > 1 { self.stars } else { self.star };
        format!("{} {}", count, word)
    }

    /// Label for a collapsible list toggle.
    pub fn list_toggle(&self, expanded: bool, total: usize) -> String {
        if expanded {
            self.view_less.to_string()
        } else {
            format!("{} ({})", self.view_all, total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(alt: &str, alt_en: Option<&str>) -> Image {
        Image {
            id: 1,
            url: "https://cdn.example.com/1.webp".to_string(),
            category: "hero".to_string(),
            alt_text: alt.to_string(),
            alt_text_en: alt_en.map(str::to_string),
        }
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("es"), Some(Language::Es));
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_alt_text_prefers_translation_in_english() {
        let img = image("Vista del pueblo", Some("Town view"));
        assert_eq!(alt_text(&img, Language::En), "Town view");
        assert_eq!(alt_text(&img, Language::Es), "Vista del pueblo");
    }

    #[test]
    fn test_alt_text_falls_back_to_primary() {
        let img = image("Vista del pueblo", None);
        assert_eq!(alt_text(&img, Language::En), "Vista del pueblo");

        let blank = image("Vista del pueblo", Some("  "));
        assert_eq!(alt_text(&blank, Language::En), "Vista del pueblo");
    }

    #[test]
    fn test_image_label_numbers_unlabeled_images() {
        let img = image("", None);
        assert_eq!(image_label(&img, Language::En, 2), "Trip scene 3");
        assert_eq!(image_label(&img, Language::Es, 0), "Escena del viaje 1");

        let labeled = image("Isla del Sol", Some("Island of the Sun"));
        assert_eq!(image_label(&labeled, Language::En, 0), "Island of the Sun");
    }

    #[test]
    fn test_whatsapp_link_strips_plus_and_encodes() {
        let link = whatsapp_link("+59163084332", "Hello! Prices & dates?");
        assert_eq!(
            link,
            "https://wa.me/59163084332?text=Hello%21%20Prices%20%26%20dates%3F"
        );
    }

    #[test]
    fn test_whatsapp_link_without_plus() {
        let link = whatsapp_link("59163084332", "hola");
        assert_eq!(link, "https://wa.me/59163084332?text=hola");
    }

    #[test]
    fn test_whatsapp_link_encodes_non_ascii() {
        let link = whatsapp_link("+591", "¡Hola!");
        assert!(link.ends_with("?text=%C2%A1Hola%21"));
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(591), "591");
        assert_eq!(format_number(1591), "1,591");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_star_label_pluralizes() {
        assert_eq!(Language::En.strings().star_label(1), "1 star");
        assert_eq!(Language::En.strings().star_label(4), "4 stars");
        assert_eq!(Language::Es.strings().star_label(5), "5 estrellas");
    }

    #[test]
    fn test_list_toggle_label() {
        let s = Language::En.strings();
        assert_eq!(s.list_toggle(false, 16), "View all (16)");
        assert_eq!(s.list_toggle(true, 16), "View less");
    }
}
