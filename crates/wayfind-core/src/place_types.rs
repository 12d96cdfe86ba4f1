/// Place categories advertised to callers for the `type` filter.
pub const PLACE_TYPES: [&str; 29] = [
    "restaurant",
    "cafe",
    "bar",
    "bakery",
    "meal_takeaway",
    "meal_delivery",
    "night_club",
    "lodging",
    "tourist_attraction",
    "museum",
    "art_gallery",
    "park",
    "zoo",
    "amusement_park",
    "movie_theater",
    "shopping_mall",
    "supermarket",
    "clothing_store",
    "book_store",
    "gas_station",
    "parking",
    "hospital",
    "pharmacy",
    "doctor",
    "bank",
    "atm",
    "gym",
    "school",
    "library",
];
