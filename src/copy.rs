//! Static page copy, one table per language.

use crate::locale::{format_number, whatsapp_link, Language};

/// The page's sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Overview,
    WhyLove,
    Itinerary,
    Included,
    RightForYou,
    Adventure,
    Notes,
    Reviews,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        Self::Overview,
        Self::WhyLove,
        Self::Itinerary,
        Self::Included,
        Self::RightForYou,
        Self::Adventure,
        Self::Notes,
        Self::Reviews,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug)]
pub struct Inclusions {
    pub meals: &'static str,
    /// Comma-joined
    pub transport: &'static str,
    /// Comma-joined
    pub accommodation: &'static str,
    pub included_activities: &'static [&'static str],
    pub optional_activities: &'static [&'static str],
}

#[derive(Debug)]
pub struct Adventure {
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub highlights: &'static [&'static str],
    pub whatsapp_button: &'static str,
    pub whatsapp_number: &'static str,
    pub whatsapp_message: &'static str,
}

#[derive(Debug)]
pub struct PageCopy {
    pub title: &'static str,
    pub days: u32,
    pub price_from: u64,
    pub currency: &'static str,
    pub tags: &'static [&'static str],
    /// Nav labels, indexed by [`SectionKind::index`].
    pub nav_links: [&'static str; 8],
    pub overview: &'static [&'static str],
    pub facts: &'static [Fact],
    pub why_love: &'static [&'static str],
    pub inclusions: Inclusions,
    pub right_for_you: &'static [&'static str],
    pub important_notes: &'static [&'static str],
    pub adventure: Adventure,
}

impl PageCopy {
    pub fn for_language(language: Language) -> &'static PageCopy {
        match language {
            Language::En => &EN,
            Language::Es => &ES,
        }
    }

    pub fn label(&self, kind: SectionKind) -> &'static str {
        self.nav_links[kind.index()]
    }

    /// "From USD 591" / "Desde USD 591".
    pub fn price_label(&self, language: Language) -> String {
        format!(
            "{} {} {}",
            language.strings().from,
            self.currency,
            format_number(self.price_from)
        )
    }

    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(self.adventure.whatsapp_number, self.adventure.whatsapp_message)
    }
}

const WHATSAPP_NUMBER: &str = "+59163084332";

static EN: PageCopy = PageCopy {
    title: "4 DAYS UNBOLIVIABLE",
    days: 4,
    price_from: 591,
    currency: "USD",
    tags: &["Nature", "Cultural"],
    nav_links: [
        "Overview",
        "Why you'll love this tour",
        "Itinerary",
        "Included",
        "Is this tour for you?",
        "Start your adventure",
        "Important notes",
        "Reviews",
    ],
    overview: &[
        "Embark on an unforgettable journey with our Lake Titicaca Tour, designed to help you explore the most captivating Bolivian tourist attractions in just a few days. This unBoliviable package takes you from the vibrant Wonder City to the mystical Lake Titicaca.",
        "Your adventure begins in Copacabana Bolivia, a charming village on the lakeshore. From there, you will set sail to the sacred Isla del Sol (Island of the Sun) and the enigmatic Isla de la Luna (Island of the Moon). Immerse yourself in the rich Andean culture, the spirituality embedded in its landscapes, and the delicious local flavors that await you.",
        "On Isla del Sol in Bolivia, where the history of Lake Titicaca comes alive, you can explore ancient archaeological trails and ancestral viewpoints that will transport you to the heart of the Inca civilization. Then relax on the serene Isla de la Luna and feel a timeless connection with Pachamama.",
        "Our team of expert guides will accompany you every step of the way, ensuring your comfort and offering truly authentic cultural experiences. Do not wait any longer to discover all the details of this fascinating itinerary and experience the magic that Copacabana in Bolivia has in store.",
    ],
    facts: &[
        Fact { label: "Start", value: "Copacabana, La Paz" },
        Fact { label: "End", value: "Island of the Moon, La Paz" },
        Fact { label: "Destinations", value: "Copacabana, Bolivia" },
        Fact { label: "Meals", value: "3 Breakfasts / 4 Lunches / 3 Dinners" },
        Fact { label: "Transport", value: "Bus, Community boat, Local transport" },
        Fact { label: "Accommodation", value: "Hotel (2 Nights), Hostel (1 Night)" },
        Fact { label: "Days", value: "4" },
        Fact { label: "Group size", value: "Min 1 – Max 16" },
        Fact { label: "Ages", value: "Min 15" },
        Fact { label: "Theme", value: "Nature; Cultural" },
        Fact { label: "Style", value: "Original" },
    ],
    why_love: &[
        "Experience the world's highest navigable lake. Flow with vibrant blue waters and abundant flora and fauna of Lake Titicaca. Keep an eye out for the endemic fish species that call Lake Titicaca home!",
        "Journey to the mystical Isla del Sol (Island of the Sun), the legendary birthplace of the Inca civilization. Here, Bolivia's history intertwines with ancestral myths and legends, offering a profound sense of connection to the past.",
        "Dive into the authentic culture of Bolivia. Admire the unique architecture of Copacabana, engage with local artisans, and let yourself be captivated by the exquisite flavors of Andean cuisine.",
        "Unwind and de-stress on the Isla de la Luna (Island of the Moon), a true sanctuary of tranquility. Explore the Temple of the Virgins of the Sun and feel an ancestral connection in a setting of unparalleled beauty, perfect for introspection.",
    ],
    inclusions: Inclusions {
        meals: "3 breakfasts, 4 lunches (including an authentic Apthapi-style lunch), 2 dinners.",
        transport: "Tourist bus (La Paz - Copacabana - La Paz), Community boat (Copacabana - Isla del Sol - Isla de la Luna - Copacabana), Local transport (Yampupata - Copacabana).",
        accommodation: "Hotel (1 night in Copacabana), Hotel (1 night on Isla del Sol), Hostel (1 night on Isla de la Luna).",
        included_activities: &[
            "Hotel pickup from your hotel in La Paz.",
            "Guide service in Spanish or English.",
            "Tourist bus journey from La Paz to Copacabana.",
            "Cultural visit of Copacabana: Explore the Church of the Virgin of Copacabana, the local market, and El Calvario.",
            "Community boat trip to Isla del Sol.",
            "Visit to the archaeological site of Pilkokaina (Temple of the Inca).",
            "Hike to Yumani.",
            "Visit to the Escalinata del Inca (Inca Stairway).",
            "Visit to the Fuente de la Juventud (Fountain of Youth).",
            "Visit to the Temple of the Sun (Templo del Sol)",
            "Community boat trip to Isla de la Luna.",
            "Visit to the Templo de las Vírgenes (Temple of the Virgins).",
            "Hike to the lodge on Isla de la Luna.",
            "Community boat trip from Isla de la Luna to Yampupata.",
            "Transport from Yampupata to Copacabana.",
            "Bus journey from Copacabana to La Paz or Puno (your choice).",
        ],
        optional_activities: &["Visit to a local museum"],
    },
    right_for_you: &[
        "Keep in mind that the destinations you will visit are at high altitudes, with Lake Titicaca situated at 3,812 meters (12,507 feet) above sea level. Some individuals may experience altitude sickness, regardless of age or physical condition. We highly recommend consulting your doctor and preparing adequately before your visit.",
        "Weather conditions in the region can change. The climate in Copacabana Bolivia, can be chilly, particularly at night, so it is essential to pack warm clothing for all seasons.",
        "You will be undertaking moderate walks on the islands, which feature uneven paths and inclines. We advise wearing appropriate footwear to fully enjoy your explorations.",
        "If you are planning to travel to Bolivia from Peru, please ensure you have all the necessary documentation. This itinerary offers a return option to Puno, given the ease of travel between the two regions.",
    ],
    important_notes: &[
        "When traveling to Bolivia, it is crucial to ensure your passport is valid for your entire trip. Also, be sure to check if you need a visa based on your nationality before you depart.",
        "The currency in Bolivia is the Boliviano (BOB). We recommend carrying some cash (BOB or USD), as access to ATMs can be limited, especially in rural areas and on the islands.",
        "Bolivia's main language is Spanish, alongside indigenous languages like Aymara and Quechua. While your guide will be fluent in both Spanish and English, learning a few basic phrases in Spanish is a great way to enhance your experience and connect with the local culture.",
    ],
    adventure: Adventure {
        title: "4-Day Adventure in Bolivia",
        description: "Explore Copacabana, Isla del Sol and Isla de la Luna",
        content: "Embark on an unforgettable journey through the mystical waters of Lake Titicaca. This 4-day package offers you a deep immersion into the heart of Andean culture, with visits to the sacred islands of the Sun and Moon.",
        highlights: &[
            "Guided tours",
            "Scenic boat rides on Lake Titicaca",
            "Authentic local gastronomic experiences",
            "Comfortable accommodations with lake views",
        ],
        whatsapp_button: "Chat on WhatsApp",
        whatsapp_number: WHATSAPP_NUMBER,
        whatsapp_message: "Hello! I'm interested in the 4-day tour to Bolivia (Copacabana, Isla del Sol and Isla de la Luna). Could you give me more information about availability and prices? Thank you!",
    },
};

static ES: PageCopy = PageCopy {
    title: "4 DÍAS UNBOLIVIABLE",
    days: 4,
    price_from: 591,
    currency: "USD",
    tags: &["Naturaleza", "Cultural"],
    nav_links: [
        "Resumen",
        "¿Por qué te encantará este tour?",
        "Itinerario",
        "Incluídos",
        "¿Es este tour para ti?",
        "Empieza tu aventura",
        "Notas importantes",
        "Reseñas",
    ],
    overview: &[
        "Embárcate en un viaje inolvidable con nuestro tour por el Lago Titicaca, diseñado para que explores los lugares turísticos de Bolivia más cautivadores en tan solo unos días. Este paquete unBoliviable te lleva desde la vibrante Ciudad Maravilla hasta el místico lago Titicaca.",
        "Tu aventura comienza en Copacabana Bolivia, un encantador pueblo a orillas del lago. Desde allí, navegarás hacia la sagrada Isla del Sol y la enigmática Isla de la Luna. Sumérgete en la rica cultura andina, la espiritualidad que emana de sus paisajes y los deliciosos sabores locales que te esperan.",
        "La Isla del Sol en Bolivia, donde la historia del lago Titicaca cobra vida, te permite explorar senderos arqueológicos y miradores ancestrales que te transportarán al corazón de la civilización inca. Relájate en la serena Isla de la Luna y siente una conexión milenaria con la Pachamama.",
        "Nuestro equipo de guías expertos te acompañará en cada paso, garantizando tu comodidad y auténticas experiencias culturales. ¡No esperes más para descubrir todos los detalles de este fascinante itinerario y vivir la magia que Copacabana en Bolivia tiene para ti!",
    ],
    facts: &[
        Fact { label: "Inicio", value: "Copacabana, La Paz" },
        Fact { label: "Fin", value: "Isla de la Luna, La Paz" },
        Fact { label: "Destinos", value: "Copacabana, Bolivia" },
        Fact { label: "Comidas", value: "3 Desayunos / 4 Almuerzos / 3 Cenas" },
        Fact { label: "Transporte", value: "Bus, Bote comunitario, Transporte local" },
        Fact { label: "Alojamiento", value: "Hotel (2 Noches), Albergue (1 Noche)" },
        Fact { label: "Días", value: "4" },
        Fact { label: "Tamaño del grupo", value: "Min 1 – Max 16" },
        Fact { label: "Edades", value: "Min 15" },
        Fact { label: "Tema", value: "Naturaleza; Cultural" },
        Fact { label: "Estilo", value: "Original" },
    ],
    why_love: &[
        "Atraviesa el lago navegable más alto del mundo. Fluye con las aguas azules y la rica fauna y flora del Lago Titicaca. ¡Observa algunas de las especies endémicas de peces del Lago Titicaca!",
        "Conecta con la mística Isla del Sol, el lugar de nacimiento de la civilización Inca, donde la historia de Bolivia se entrelaza con mitos y leyendas ancestrales.",
        "Sumérgete en la auténtica cultura de Bolivia, aprecia la arquitectura de Copacabana, interactúa con sus artesanos locales y déjate seducir por los sabores de la gastronomía andina.",
        "Libérate del estrés y relájate en la Isla de la Luna, el santuario de la tranquilidad. Descubre el Templo de las Vírgenes del Sol y siente la conexión ancestral en un entorno de belleza inigualable, ideal para la introspección.",
    ],
    inclusions: Inclusions {
        meals: "3 desayunos, 4 almuerzos (incluyendo un auténtico almuerzo Tipo Apthapi), 2 cenas.",
        transport: "Bus turístico (La Paz - Copacabana - La Paz), Bote comunitario (Copacabana - Isla del Sol - Isla de la Luna - Copacabana), Transporte local (Yampupata - Copacabana).",
        accommodation: "Hotel (1 noche en Copacabana), Hotel (1 noche en Isla del Sol), Albergue (1 noche en Isla de la Luna).",
        included_activities: &[
            "Recojo desde tu hotel en La Paz.",
            "Servicio de guiaje en español o inglés.",
            "Viaje en bus turístico de La Paz a Copacabana.",
            "Visita cultural por Copacabana: Iglesia de la Virgen de Copacabana, mercado local y El Calvario.",
            "Viaje en bote comunitario a la Isla del Sol.",
            "Visita a los restos arqueológicos de Pilkokaina (Templo del Inca).",
            "Caminata a Yumani.",
            "Visita a la Escalinata del Inca.",
            "Visita a la Fuente de la Juventud.",
            "Visita al Templo del Sol.",
            "Viaje en bote comunitario a la Isla de la Luna.",
            "Visita al Templo de las Vírgenes.",
            "Caminata al albergue en Isla de la Luna.",
            "Viaje en bote comunitario de Isla de la Luna a Yampupata.",
            "Transporte de Yampupata a Copacabana.",
            "Viaje en bus de Copacabana a La Paz o Puno (según tu elección).",
        ],
        optional_activities: &["Visita a un museo local"],
    },
    right_for_you: &[
        "Los destinos visitados se encuentran en altitudes elevadas, el Lago Titicaca a 3.812 metros sobre el nivel del mar. Es importante considerar que, algunas personas pueden experimentar mal de altura, independientemente de la edad o condición física. Te recomendamos consultar a tu médico y prepararte adecuadamente antes de tu visita.",
        "Las condiciones climáticas en la región varían. El clima en Copacabana Bolivia, puede ser frío, especialmente por las noches, por lo que es esencial empacar ropa abrigadora en todas las estaciones.",
        "Se realizarán caminatas moderadas en las islas, con senderos irregulares y pendientes. Se recomienda utilizar un calzado adecuado para disfrutar plenamente de las exploraciones.",
        "Si planeas viajar a Bolivia desde Perú, asegúrate de tener la documentación necesaria. El itinerario ofrece una opción de retorno hacia Puno, dada la facilidad de desplazamiento entre regiones.",
    ],
    important_notes: &[
        "Como requisitos de viaje a Bolivia es crucial que tu pasaporte esté vigente. Asegúrate de verificar cualquier necesidad de visado según tu nacionalidad.",
        "La moneda de Bolivia es el Boliviano (BOB). Se recomienda llevar algo de efectivo (BOB o USD), ya que en zonas rurales y en las islas el acceso a cajeros automáticos es limitado.",
        "El idioma de Bolivia principal es el español, junto con lenguas indígenas como el aymara y el quechua. Aunque tu guía hablará español e inglés, aprender algunas frases básicas es recomendable para elevar tu experiencia.",
    ],
    adventure: Adventure {
        title: "Aventura 4 Días en Bolivia",
        description: "Explora Copacabana, la Isla del Sol y la Isla de la Luna",
        content: "Emprende un viaje inolvidable por las místicas aguas del Lago Titicaca. Este paquete de 4 días te ofrece una inmersión profunda en el corazón de la cultura andina, con visitas a las sagradas islas del Sol y la Luna.",
        highlights: &[
            "Tours guiados",
            "Paseos en bote escénicos por el Lago Titicaca",
            "Experiencias gastronómicas locales auténticas",
            "Alojamientos cómodos con vistas al lago",
        ],
        whatsapp_button: "Chatear por WhatsApp",
        whatsapp_number: WHATSAPP_NUMBER,
        whatsapp_message: "¡Hola! Me interesa el tour de 4 días a Bolivia (Copacabana, Isla del Sol e Isla de la Luna). ¿Podrían darme más información sobre disponibilidad y precios? ¡Gracias!",
    },
};
