//! Static presentation data shown alongside the AI features.

/// Direction of a price since the last update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketPrice {
    pub commodity: &'static str,
    pub price: &'static str,
    pub location: &'static str,
    pub trend: Trend,
}

/// A crop offered for research on the farm screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropSample {
    pub name: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumPost {
    pub author: &'static str,
    pub body: &'static str,
    pub replies: u32,
}

/// Unit the market prices are quoted in.
pub const PRICE_UNIT: &str = "Kwa Gunia / Tenga";

pub fn market_prices() -> Vec<MarketPrice> {
    vec![
        MarketPrice {
            commodity: "Mahindi",
            price: "Tsh 85,000",
            location: "Dar-Tandale",
            trend: Trend::Up,
        },
        MarketPrice {
            commodity: "Mpunga",
            price: "Tsh 120,000",
            location: "Dodoma",
            trend: Trend::Down,
        },
        MarketPrice {
            commodity: "Nyanya",
            price: "Tsh 28,000",
            location: "Mbeya-Uyole",
            trend: Trend::Up,
        },
        MarketPrice {
            commodity: "Vitunguu",
            price: "Tsh 45,000",
            location: "Arusha-Soko Kuu",
            trend: Trend::Up,
        },
    ]
}

pub fn crop_samples() -> Vec<CropSample> {
    vec![
        CropSample {
            name: "Mahindi",
            image_url: "https://images.unsplash.com/photo-1592982537447-7440770cbfc9?auto=format&fit=crop&q=80&w=400",
        },
        CropSample {
            name: "Mpunga",
            image_url: "https://images.unsplash.com/photo-1536633310180-2dc2bc41f2a3?auto=format&fit=crop&q=80&w=400",
        },
        CropSample {
            name: "Nyanya",
            image_url: "https://images.unsplash.com/photo-1590666014460-70f03264b36d?auto=format&fit=crop&q=80&w=400",
        },
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1",
            title: "Kilimo cha Umwagiliaji: Mbinu za 2026",
            category: "Teknolojia",
            excerpt: "Jinsi ya kutumia vitambuzi vya unyevu kuokoa 40% ya maji yako na kuongeza tija...",
            author: "Dr. Mushi",
            date: "Okt 2024",
        },
        Article {
            id: "2",
            title: "Soko la Nyanya: Kuelekea Mavuno Makubwa",
            category: "Soko",
            excerpt: "Uchambuzi wa mahitaji ya nyanya katika masoko ya mikoani kote Tanzania...",
            author: "Mama Faraja",
            date: "Nov 2024",
        },
        Article {
            id: "3",
            title: "Mbolea ya Asili: Siri ya Mabingwa",
            category: "Mbinu",
            excerpt: "Mbinu mpya za kutengeneza mbolea bora nyumbani kwa gharama sifuri kabisa...",
            author: "Juma K.",
            date: "Des 2024",
        },
        Article {
            id: "4",
            title: "Mpunga wa Kisasa Iringa",
            category: "Crop Specific",
            excerpt: "Utafiti mpya wa mbegu za mpunga zinazovumilia hali ya hewa ya baridi...",
            author: "Eng. Salim",
            date: "Jan 2025",
        },
    ]
}

pub fn forum_posts() -> Vec<ForumPost> {
    vec![ForumPost {
        author: "Mkulima",
        body: "Nimeona mabadiliko ya bei ya nyanya leo Tandale, imefika Tsh 28,000 kwa tenga moja. Masoko ya Iringa vipi?",
        replies: 12,
    }]
}

/// Static weather card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub temperature_c: i32,
    pub humidity: &'static str,
    pub wind: &'static str,
    /// Day label and high temperature.
    pub forecast: Vec<(&'static str, i32)>,
}

pub fn weather() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c: 28,
        humidity: "65%",
        wind: "12km/h",
        forecast: vec![("Leo", 24), ("Kesho", 25), ("J3", 26), ("J4", 27)],
    }
}

/// Headline figures on the admin panel.
pub fn admin_stats() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Total Users", "12,840"),
        ("Active Sessions", "3,122"),
        ("Pest Scans", "45.2K"),
        ("Impact Est.", "84M+"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let prices = market_prices();
        assert_eq!(prices.len(), 4);
        assert_eq!(prices[1].trend, Trend::Down);

        let crops: Vec<_> = crop_samples().iter().map(|c| c.name).collect();
        assert_eq!(crops, vec!["Mahindi", "Mpunga", "Nyanya"]);

        let ids: Vec<_> = articles().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);

        assert_eq!(forum_posts()[0].replies, 12);
        assert_eq!(weather().forecast.len(), 4);
        assert_eq!(admin_stats()[0], ("Total Users", "12,840"));
    }
}
