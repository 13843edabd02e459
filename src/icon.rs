//! The fixed set of icons categories, goals and payment methods can use.
//!
//! The backend stores icons as free-form strings. Rather than reflecting
//! over an icon library at render time, the supported identifiers are an
//! explicit enum with a defined fallback, so an unknown or misspelled name
//! degrades to a sensible default instead of a crash or a blank.

/// An icon identifier supported by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Icon {
    Target,
    Car,
    Home,
    Plane,
    Smartphone,
    Laptop,
    Gift,
    Shield,
    Coffee,
    Utensils,
    ShoppingBag,
    Heart,
    Zap,
    Star,
    Music,
    Camera,
    Palette,
    Gamepad,
    Library,
    Dumbbell,
    Bike,
    Wallet,
    /// The fallback for unknown names.
    CreditCard,
}

impl Icon {
    /// Resolve a stored icon name, falling back to [Icon::CreditCard] for
    /// unknown names, empty strings, and URLs (which the client does not
    /// render as glyphs).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Target" => Icon::Target,
            "Car" => Icon::Car,
            "Home" => Icon::Home,
            "Plane" => Icon::Plane,
            "Smartphone" => Icon::Smartphone,
            "Laptop" => Icon::Laptop,
            "Gift" => Icon::Gift,
            "Shield" => Icon::Shield,
            "Coffee" => Icon::Coffee,
            "Utensils" => Icon::Utensils,
            "ShoppingBag" => Icon::ShoppingBag,
            "Heart" => Icon::Heart,
            "Zap" => Icon::Zap,
            "Star" => Icon::Star,
            "Music" => Icon::Music,
            "Camera" => Icon::Camera,
            "Palette" => Icon::Palette,
            "Gamepad2" => Icon::Gamepad,
            "Library" => Icon::Library,
            "Dumbbell" => Icon::Dumbbell,
            "Bike" => Icon::Bike,
            "Wallet" => Icon::Wallet,
            "CreditCard" => Icon::CreditCard,
            _ => Icon::CreditCard,
        }
    }

    /// The canonical name, as stored by the backend.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Target => "Target",
            Icon::Car => "Car",
            Icon::Home => "Home",
            Icon::Plane => "Plane",
            Icon::Smartphone => "Smartphone",
            Icon::Laptop => "Laptop",
            Icon::Gift => "Gift",
            Icon::Shield => "Shield",
            Icon::Coffee => "Coffee",
            Icon::Utensils => "Utensils",
            Icon::ShoppingBag => "ShoppingBag",
            Icon::Heart => "Heart",
            Icon::Zap => "Zap",
            Icon::Star => "Star",
            Icon::Music => "Music",
            Icon::Camera => "Camera",
            Icon::Palette => "Palette",
            Icon::Gamepad => "Gamepad2",
            Icon::Library => "Library",
            Icon::Dumbbell => "Dumbbell",
            Icon::Bike => "Bike",
            Icon::Wallet => "Wallet",
            Icon::CreditCard => "CreditCard",
        }
    }

    /// A single-character glyph for terminal display.
    pub fn glyph(&self) -> char {
        match self {
            Icon::Target => '◎',
            Icon::Car => '🚗',
            Icon::Home => '🏠',
            Icon::Plane => '✈',
            Icon::Smartphone => '📱',
            Icon::Laptop => '💻',
            Icon::Gift => '🎁',
            Icon::Shield => '🛡',
            Icon::Coffee => '☕',
            Icon::Utensils => '🍴',
            Icon::ShoppingBag => '🛍',
            Icon::Heart => '♥',
            Icon::Zap => '⚡',
            Icon::Star => '★',
            Icon::Music => '♪',
            Icon::Camera => '📷',
            Icon::Palette => '🎨',
            Icon::Gamepad => '🎮',
            Icon::Library => '📚',
            Icon::Dumbbell => '🏋',
            Icon::Bike => '🚲',
            Icon::Wallet => '👛',
            Icon::CreditCard => '💳',
        }
    }
}
