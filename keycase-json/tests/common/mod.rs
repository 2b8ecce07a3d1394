//! Shared fixtures for keycase-json integration tests

#![allow(dead_code)]

use serde_json::{json, Value};

/// Route `tracing` output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// A venue document with snake_case keys at several depths
pub fn place_snake() -> Value {
    json!({
        "place": {
            "address": {
                "city": "Rosario",
                "country": "Argentina",
                "country_code": "ar",
                "full_address": "Juan D Perón 2130",
                "geo_location": {
                    "lat": -32.9553549,
                    "lng": -60.66474210000001
                },
                "number": "2130",
                "state": "santa fe",
                "street": "Juan D. Peron",
                "zip_code": "2000"
            },
            "app_config": {
                "check_in": {
                    "qr_code": "value",
                    "type": "QR_CODE"
                },
                "custom_fields": [
                    {
                        "display_text": "Fecha nacimiento",
                        "key": "birth_date",
                        "type": "date"
                    }
                ],
                "disabled": false,
                "identifications": [
                    { "default": true, "key": "dni" },
                    { "key": "dni-ext" }
                ],
                "messages": [
                    { "key": "closed", "language": "en", "text": "We are closed." },
                    { "key": "closed", "language": "es", "text": "Estamos cerrados, intente mas tarde" }
                ],
                "requirements": {
                    "custom_fields": ["birth_date"],
                    "identification": true
                },
                "show_waiting_time": true,
                "visible": true
            },
            "categories": ["stablishment"],
            "email": "my@mail.com",
            "google_place_id": "googlePlaceId",
            "images": [
                { "type": "banner", "url": "www.mycdn.com/pic.jpg" },
                { "type": "thumbnail", "url": "www.mycdn.com/pic.jpg" }
            ],
            "organization": {
                "id": "oi4joij5oij7oij7oij8",
                "name": "An organization"
            },
            "phones": ["+54 9 341 4406974"],
            "place_id": "pru",
            "timezone": "America/Argentina/Buenos_Aires"
        }
    })
}

/// [`place_snake`] with camelCase keys
pub fn place_camel() -> Value {
    json!({
        "place": {
            "address": {
                "city": "Rosario",
                "country": "Argentina",
                "countryCode": "ar",
                "fullAddress": "Juan D Perón 2130",
                "geoLocation": {
                    "lat": -32.9553549,
                    "lng": -60.66474210000001
                },
                "number": "2130",
                "state": "santa fe",
                "street": "Juan D. Peron",
                "zipCode": "2000"
            },
            "appConfig": {
                "checkIn": {
                    "qrCode": "value",
                    "type": "QR_CODE"
                },
                "customFields": [
                    {
                        "displayText": "Fecha nacimiento",
                        "key": "birth_date",
                        "type": "date"
                    }
                ],
                "disabled": false,
                "identifications": [
                    { "default": true, "key": "dni" },
                    { "key": "dni-ext" }
                ],
                "messages": [
                    { "key": "closed", "language": "en", "text": "We are closed." },
                    { "key": "closed", "language": "es", "text": "Estamos cerrados, intente mas tarde" }
                ],
                "requirements": {
                    "customFields": ["birth_date"],
                    "identification": true
                },
                "showWaitingTime": true,
                "visible": true
            },
            "categories": ["stablishment"],
            "email": "my@mail.com",
            "googlePlaceId": "googlePlaceId",
            "images": [
                { "type": "banner", "url": "www.mycdn.com/pic.jpg" },
                { "type": "thumbnail", "url": "www.mycdn.com/pic.jpg" }
            ],
            "organization": {
                "id": "oi4joij5oij7oij7oij8",
                "name": "An organization"
            },
            "phones": ["+54 9 341 4406974"],
            "placeId": "pru",
            "timezone": "America/Argentina/Buenos_Aires"
        }
    })
}

/// [`place_snake`] with PascalCase keys
pub fn place_pascal() -> Value {
    json!({
        "Place": {
            "Address": {
                "City": "Rosario",
                "Country": "Argentina",
                "CountryCode": "ar",
                "FullAddress": "Juan D Perón 2130",
                "GeoLocation": {
                    "Lat": -32.9553549,
                    "Lng": -60.66474210000001
                },
                "Number": "2130",
                "State": "santa fe",
                "Street": "Juan D. Peron",
                "ZipCode": "2000"
            },
            "AppConfig": {
                "CheckIn": {
                    "QrCode": "value",
                    "Type": "QR_CODE"
                },
                "CustomFields": [
                    {
                        "DisplayText": "Fecha nacimiento",
                        "Key": "birth_date",
                        "Type": "date"
                    }
                ],
                "Disabled": false,
                "Identifications": [
                    { "Default": true, "Key": "dni" },
                    { "Key": "dni-ext" }
                ],
                "Messages": [
                    { "Key": "closed", "Language": "en", "Text": "We are closed." },
                    { "Key": "closed", "Language": "es", "Text": "Estamos cerrados, intente mas tarde" }
                ],
                "Requirements": {
                    "CustomFields": ["birth_date"],
                    "Identification": true
                },
                "ShowWaitingTime": true,
                "Visible": true
            },
            "Categories": ["stablishment"],
            "Email": "my@mail.com",
            "GooglePlaceId": "googlePlaceId",
            "Images": [
                { "Type": "banner", "Url": "www.mycdn.com/pic.jpg" },
                { "Type": "thumbnail", "Url": "www.mycdn.com/pic.jpg" }
            ],
            "Organization": {
                "Id": "oi4joij5oij7oij7oij8",
                "Name": "An organization"
            },
            "Phones": ["+54 9 341 4406974"],
            "PlaceId": "pru",
            "Timezone": "America/Argentina/Buenos_Aires"
        }
    })
}
