//! Bundled content shown when the content service can't be reached.
//!
//! Every value here has the exact shape of live data so the aggregator can
//! swap one for the other without special cases.

use super::model::{
    ContentCategory, Image, ImageSet, Itinerary, ItineraryDay, Review, ReviewAggregate,
    ReviewsPayload,
};
use crate::locale::Language;
use std::collections::BTreeMap;

/// Fallback payload for one category.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackContent {
    Reviews(ReviewsPayload),
    Images(ImageSet),
    Itinerary(Itinerary),
}

/// Static lookup keyed by category and language.
pub fn lookup(category: ContentCategory, language: Language, package_id: &str) -> FallbackContent {
    match category {
        ContentCategory::Reviews => FallbackContent::Reviews(reviews(language)),
        ContentCategory::Images => FallbackContent::Images(images(package_id)),
        ContentCategory::Itinerary => FallbackContent::Itinerary(itinerary(language, package_id)),
    }
}

// (name, date en, date es, rating, body en, body es)
const REVIEWS: [(&str, &str, &str, u8, &str, &str); 5] = [
    (
        "Sarah Mitchell",
        "December 2024",
        "Diciembre 2024",
        5,
        "Absolutely incredible journey! The guides were knowledgeable and passionate. Lake Titicaca at sunrise was breathtaking. Every moment was perfectly organized. Highly recommend!",
        "¡Un viaje absolutamente increíble! Los guías eran expertos y apasionados. El Lago Titicaca al amanecer fue impresionante. Cada momento estuvo perfectamente organizado. ¡Muy recomendable!",
    ),
    (
        "Carlos Rodriguez",
        "November 2024",
        "Noviembre 2024",
        4,
        "Great trip overall. The boat rides were amazing and the cultural experiences were rewarding. Food was good and accommodations were decent. Only wish we had more time in Copacabana.",
        "Gran viaje en general. Los paseos en bote fueron increíbles y las experiencias culturales muy enriquecedoras. La comida era buena y el alojamiento correcto. Solo me hubiera gustado tener más tiempo en Copacabana.",
    ),
    (
        "Emma Thompson",
        "November 2024",
        "Noviembre 2024",
        5,
        "Life-changing experience! The local families we met were so welcoming. The Island of the Sun was otherworldly. Worth every penny!",
        "¡Una experiencia que cambia la vida! Las familias locales que conocimos fueron muy acogedoras. La Isla del Sol parecía de otro mundo. ¡Vale cada centavo!",
    ),
    (
        "Michael Chen",
        "October 2024",
        "Octubre 2024",
        3,
        "Good trip but had some issues with transportation delays. The sites were amazing but the organization could be better. Still glad I went.",
        "Buen viaje, aunque hubo algunos retrasos con el transporte. Los lugares eran increíbles, pero la organización podría mejorar. Aun así me alegra haber ido.",
    ),
    (
        "Isabella Garcia",
        "October 2024",
        "Octubre 2024",
        5,
        "Perfect blend of adventure and culture. Our guide Maria was fantastic. The island experience was authentic and meaningful. Couldn't ask for more!",
        "Una mezcla perfecta de aventura y cultura. Nuestra guía María fue fantástica. La experiencia en la isla fue auténtica y significativa. ¡No se puede pedir más!",
    ),
];

pub fn reviews(language: Language) -> ReviewsPayload {
    let reviews = REVIEWS
        .iter()
        .enumerate()
        .map(|(i, (name, date_en, date_es, rating, body_en, body_es))| Review {
            id: i as u64 + 1,
            display_name: name.to_string(),
            date: match language {
                Language::En => date_en.to_string(),
                Language::Es => date_es.to_string(),
            },
            rating: *rating,
            body: match language {
                Language::En => body_en.to_string(),
                Language::Es => body_es.to_string(),
            },
        })
        .collect();

    ReviewsPayload {
        aggregate: ReviewAggregate {
            average_rating: 4.4,
            total_count: 5,
            star_distribution: BTreeMap::from([(1, 0), (2, 0), (3, 1), (4, 1), (5, 3)]),
        },
        reviews,
    }
}

// (id, category, query, alt es, alt en)
const IMAGES: [(u64, &str, &str, &str, &str); 11] = [
    (1, "hero", "copacabana+bolivia", "Vista del pueblo de Copacabana", "Copacabana town view"),
    (2, "itinerary", "copacabana+lakeside", "Orilla del lago en Copacabana", "Copacabana lakeside"),
    (3, "overview", "isla+del+sol+panoramic", "Vista panorámica de la Isla del Sol", "Island of the Sun panoramic view"),
    (4, "itinerary", "isla+de+la+luna+temple", "Templo de la Isla de la Luna", "Island of the Moon temple"),
    (5, "hero", "copacabana+street", "Vista de la calle en Copacabana", "Copacabana street view"),
    (6, "itinerary", "isla+del+sol+landscape", "Paisaje de la Isla del Sol", "Island of the Sun landscape"),
    (7, "hero", "copacabana+market", "Mercado de Copacabana", "Copacabana market"),
    (8, "itinerary", "isla+de+la+luna+ruins", "Ruinas de la Isla de la Luna", "Island of the Moon ruins"),
    (9, "hero", "isla+del+sol+terraces", "Terrazas de la Isla del Sol", "Island of the Sun terraces"),
    (10, "hero", "isla+del+sol+sunset", "Atardecer en la Isla del Sol", "Island of the Sun sunset"),
    (11, "hero", "isla+del+sol+village", "Pueblo de la Isla del Sol", "Island of the Sun village"),
];

/// Placeholder images. Not used to seed the page; see `aggregator`.
pub fn images(package_id: &str) -> ImageSet {
    let images = IMAGES
        .iter()
        .map(|(id, category, query, alt_es, alt_en)| {
            let size = if *id == 1 { "height=600&width=800" } else { "height=400&width=600" };
            Image {
                id: *id,
                url: format!("/placeholder.svg?{}&query={}", size, query),
                category: category.to_string(),
                alt_text: alt_es.to_string(),
                alt_text_en: Some(alt_en.to_string()),
            }
        })
        .collect();

    ImageSet {
        package_id: package_id.to_string(),
        images,
    }
}

struct DayText {
    title: &'static str,
    description: &'static str,
    accommodation: &'static str,
    included_activities: &'static str,
    meals: &'static str,
    optional_activities: &'static [&'static str],
}

static DAYS_EN: [DayText; 4] = [
    DayText {
        title: "Copacabana, Gateway to Titicaca",
        description: "Your adventure begins with a scenic journey from La Paz to Copacabana, the Andean heart of Lake Titicaca. Once you arrive, you'll settle in and spend the afternoon exploring the charms of this town, from its iconic church to its vibrant local market, enjoying the views from El Calvario. The day will conclude with dinner and overnight stay.",
        accommodation: "Hotel (1 night)",
        included_activities: "Tourist bus travel from La Paz to Copacabana, Visit to the Church of the Virgin of Copacabana, Exploration of Copacabana's local market, Ascent to El Calvario",
        meals: "Lunch, Dinner",
        optional_activities: &["Visit to a local museum"],
    },
    DayText {
        title: "Island of the Sun, Cradle of the Inca Empire",
        description: "Embark on an unforgettable boat trip to the Island of the Sun, sacred place where Inca history comes to life. Explore ancient temples and ruins, like Pilkokaina, walk through ancestral paths to Yumani. Be amazed by the spectacular views of the lake. Visit the Inca Stairway, the Fountain of Youth and the Temple of the Sun. Dinner and overnight stay will be on the island.",
        accommodation: "Hotel on Lake Titicaca (1 night)",
        included_activities: "Community boat trip to the Island of the Sun, Visit to the archaeological remains of Pilkokaina 'Inca Temple', Hike to Yumani, Visit to the Inca Stairway, Visit to the Fountain of Youth, Visit to the Temple of the Sun",
        meals: "Breakfast, Lunch, Dinner",
        optional_activities: &[],
    },
    DayText {
        title: "Island of the Moon, Sanctuary of Peace",
        description: "Discover the mysteries of the Island of the Moon. After a relaxing boat trip, you'll explore the ancient temple of the Virgins, where you'll enjoy an authentic Apthapi-style lunch. The afternoon invites you to a peaceful walk to reach your hostel. A space where silence and the lake breeze will mark the beginning of a restorative night, accompanied by a comforting dinner and rest.",
        accommodation: "Hostel (1 night)",
        included_activities: "Community boat trip to the Island of the Moon, Visit to the Temple of the Virgins, Apthapi-style lunch, Hike to the hostel",
        meals: "Breakfast, Lunch (Apthapi-style), Dinner",
        optional_activities: &[],
    },
    DayText {
        title: "Return and Farewell to Titicaca",
        description: "Your last day at Titicaca begins with a boat trip back, once again enjoying the panoramic views of the lake. From Yampupata, transport will take you back to Copacabana for a final lunch before embarking on your return journey on a Copacabana-La Paz bus or, if you prefer, continue your adventure to Puno in Peru.",
        accommodation: "Not included",
        included_activities: "Community boat trip from Island of the Moon to Yampupata, Transport from Yampupata to Copacabana, Bus trip from Copacabana to La Paz or Puno",
        meals: "Breakfast, Lunch",
        optional_activities: &[],
    },
];

static DAYS_ES: [DayText; 4] = [
    DayText {
        title: "Copacabana, Puerta del Titicaca",
        description: "Tu aventura comienza con un pintoresco viaje desde La Paz hacia Copacabana, corazón andino del Lago Titicaca. Una vez que llegues, te acomodarás y pasarás la tarde explorando los encantos de este pueblo, desde su icónica iglesia hasta su vibrante mercado local, disfrutando de las vistas desde El Calvario. La jornada concluirá con cena y pernocte.",
        accommodation: "Hotel (1 noche)",
        included_activities: "Viaje en bus turístico de La Paz a Copacabana, Visita a la Iglesia de la Virgen de Copacabana, Exploración del mercado local de Copacabana, Ascenso a El Calvario",
        meals: "Almuerzo, Cena",
        optional_activities: &["Visita a un museo local"],
    },
    DayText {
        title: "Isla del Sol, Cuna del Imperio Inca",
        description: "Embárcate en un inolvidable viaje en bote a la Isla del Sol, lugar sagrado donde la historia Inca cobra vida. Explora antiguos templos y ruinas, como Pilkokaina, caminarás por senderos ancestrales hasta Yumani. Déjate sorprender con las vistas espectaculares del lago. Visita la Escalinata del Inca, la Fuente de la Juventud y el Templo del Sol. La cena y pernocte serán en la isla.",
        accommodation: "Hotel en el Lago Titicaca (1 noche)",
        included_activities: "Viaje en bote comunitario a la Isla del Sol, Visita a los restos arqueológicos de Pilkokaina 'Templo del Inca', Caminata a Yumani, Visita a la Escalinata del Inca, Visita a la Fuente de la Juventud, Visita al Templo del Sol",
        meals: "Desayuno, Almuerzo, Cena",
        optional_activities: &[],
    },
    DayText {
        title: "Isla de la Luna, Santuario de Paz",
        description: "Descubre los misterios de la Isla de la Luna. Tras un relajante viaje en bote, explorarás el templo ancestral de las Vírgenes, donde disfrutarás de un auténtico almuerzo tipo Apthapi. La tarde te invita a una caminata tranquila para llegar a tu albergue. Espacio donde el silencio y la brisa del lago marcarán el inicio de una noche reparadora, acompañada de una cena reconfortante y descanso.",
        accommodation: "Albergue (1 noche)",
        included_activities: "Viaje en bote comunitario a la Isla de la Luna, Visita al Templo de las Vírgenes, Almuerzo tipo Apthapi, Caminata al albergue",
        meals: "Desayuno, Almuerzo (Tipo Apthapi), Cena",
        optional_activities: &[],
    },
    DayText {
        title: "Regreso y Despedida del Titicaca",
        description: "Tu último día en el Titicaca comienza con un viaje en bote de regreso, disfrutando una vez más de las vistas panorámicas del lago. Desde Yampupata, un transporte te llevará de vuelta a Copacabana para un almuerzo final antes de emprender tu viaje de regreso en un bus Copacabana-La Paz o, si lo prefieres, continuar tu aventura hacia Puno en Perú.",
        accommodation: "No incluido",
        included_activities: "Viaje en bote comunitario de Isla de la Luna a Yampupata, Transporte de Yampupata a Copacabana, Viaje en bus de Copacabana a La Paz o Puno",
        meals: "Desayuno, Almuerzo",
        optional_activities: &[],
    },
];

pub fn itinerary(language: Language, package_id: &str) -> Itinerary {
    let source = match language {
        Language::En => &DAYS_EN,
        Language::Es => &DAYS_ES,
    };

    let days = source
        .iter()
        .enumerate()
        .map(|(i, d)| ItineraryDay {
            day_number: i as u32 + 1,
            title: d.title.to_string(),
            description: d.description.to_string(),
            accommodation: d.accommodation.to_string(),
            included_activities: d.included_activities.to_string(),
            meals: d.meals.to_string(),
            optional_activities: d.optional_activities.iter().map(|s| s.to_string()).collect(),
            special_info: None,
        })
        .collect();

    Itinerary {
        package_id: package_id.to_string(),
        days,
    }
}
