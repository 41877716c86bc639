//! End-to-end: schema document in, rendered inputs and change events out.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};
use staykit_form::widgets::{Commit, GeolocationInput};
use staykit_form::{
    indicator_color, IndicatorColor, InputProps, MultiLanguageInput, ResourceInput, ValidationState, Widget,
};
use staykit_schema::SchemaDocument;
use staykit_types::{is_valid_hex, normalize_hex_color, Coordinate, LatLng, MultiLanguageValue};

const SCHEMA: &str = r#"{
    "languages": [
        {"locale": "en", "international_name": "English", "iso_locale": "en_GB"},
        {"locale": "es", "international_name": "Spanish", "iso_locale": "es_ES"}
    ],
    "resources": {
        "booking": {
            "fields": {
                "status": {
                    "type": "picklist",
                    "label": "Status",
                    "possibleValues": {"pending": "Pending", "confirmed": "Confirmed", "cancelled": "Cancelled"}
                },
                "notes": {"type": "text", "label": "Notes", "description": "Visible to staff only"},
                "paid": {"type": "boolean", "label": "Paid"},
                "stay": {"type": "daterange", "label": "Stay"}
            },
            "actions": {
                "update": {
                    "status": {
                        "type": "picklist",
                        "label": "Status",
                        "possibleValues": {"confirmed": "Confirmed", "cancelled": "Cancelled"}
                    }
                }
            }
        },
        "property": {
            "fields": {
                "title": {"type": "translated-text", "label": "Title", "isRequired": true},
                "location": {"type": "geo", "label": "Location"},
                "owner": {"type": "belongs-to", "label": "Owner", "relatesTo": "account"},
                "scan": {"type": "file", "label": "Scan"}
            }
        }
    },
    "overrides": [
        {"apply_to": ["booking.notes"], "options": {"format": "multiline", "rows": 4}}
    ]
}"#;

fn recorder() -> (Rc<RefCell<Vec<Value>>>, InputProps) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let props = InputProps::new().on_change(move |v| sink.borrow_mut().push(v));
    (seen, props)
}

#[test]
fn booking_status_update_renders_scoped_picklist() {
    let (registry, languages) = SchemaDocument::from_json_str(SCHEMA).unwrap().into_parts().unwrap();
    let form = ResourceInput::new(&registry, &languages);

    let (seen, props) = recorder();
    let input = form.render("booking", "status", Some("update"), props).unwrap();

    match &input.widget {
        Widget::Select { options } => {
            let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["confirmed", "cancelled"]);
        }
        other => panic!("expected a select, got {:?}", other),
    }

    input.change("confirmed");
    assert_eq!(*seen.borrow(), vec![json!("confirmed")]);
}

#[test]
fn dom_events_are_unwrapped() {
    let (registry, languages) = SchemaDocument::from_json_str(SCHEMA).unwrap().into_parts().unwrap();
    let form = ResourceInput::new(&registry, &languages);

    let (seen, props) = recorder();
    let input = form.render("booking", "notes", None, props).unwrap();
    assert_eq!(input.widget, Widget::Textarea { rows: Some(4) });

    input.change(json!({"target": {"value": "Late arrival"}}));
    input.change(json!({"lat": 1.0, "lon": 2.0}));
    assert_eq!(*seen.borrow(), vec![json!("Late arrival"), json!({"lat": 1.0, "lon": 2.0})]);
}

#[test]
fn wrapper_reports_description_and_error() {
    let (registry, languages) = SchemaDocument::from_json_str(SCHEMA).unwrap().into_parts().unwrap();
    let form = ResourceInput::new(&registry, &languages);

    let input = form
        .render("booking", "notes", None, InputProps::new().error("Too long"))
        .unwrap();
    assert_eq!(input.wrapper.state, ValidationState::Error);
    assert_eq!(input.wrapper.description.as_deref(), Some("Visible to staff only"));
    assert_eq!(
        input.child.aria_describedby.as_deref(),
        Some("booking-notes-description booking-notes-error")
    );
}

#[test]
fn unsupported_type_renders_nothing() {
    let (registry, languages) = SchemaDocument::from_json_str(SCHEMA).unwrap().into_parts().unwrap();
    let form = ResourceInput::new(&registry, &languages);

    assert!(form.render("property", "scan", None, InputProps::new()).is_none());
    assert!(form.render("property", "missing", None, InputProps::new()).is_none());
    assert!(form.render("property", "owner", None, InputProps::new()).is_some());
}

#[test]
fn translated_title_edits_one_locale_at_a_time() {
    let (registry, languages) = SchemaDocument::from_json_str(SCHEMA).unwrap().into_parts().unwrap();
    let form = ResourceInput::new(&registry, &languages);

    let (seen, props) = recorder();
    let rendered = form
        .render("property", "title", None, props.value(json!({"en": "a"})))
        .unwrap();
    assert!(rendered.wrapper.required);

    let current: MultiLanguageValue = serde_json::from_value(rendered.value.clone()).unwrap();
    let mut editor = MultiLanguageInput::controlled(&languages, current);
    assert!(editor.select("es"));
    let next = editor.input("b").unwrap();
    rendered.change(serde_json::to_value(&next).unwrap());

    assert_eq!(*seen.borrow(), vec![json!({"en": "a", "es": "b"})]);
}

#[test]
fn value_helpers() {
    assert_eq!(indicator_color("", Some(5), Some(10)), IndicatorColor::Gray);
    assert_eq!(indicator_color("hello world!", Some(5), Some(10)), IndicatorColor::Red);
    assert_eq!(indicator_color("hey", Some(5), Some(10)), IndicatorColor::Orange);
    assert_eq!(indicator_color("hello", Some(5), Some(10)), IndicatorColor::Green);

    assert_eq!(normalize_hex_color("fff").as_deref(), Some("#FFFFFF"));
    assert_eq!(normalize_hex_color("#1a2b3c").as_deref(), Some("#1A2B3C"));
    assert_eq!(normalize_hex_color("#12345"), None);
    assert!(!is_valid_hex("#ZZZZZZ"));
}

#[test]
fn map_picks_round_trip() {
    let mut geo = GeolocationInput::uncontrolled(None);
    let commit = geo.pick_on_map(LatLng { lat: 10.0, lng: 20.0 });
    assert_eq!(commit, Commit::Changed(Some(Coordinate { lat: 10.0, lon: 20.0 })));
    assert_eq!(geo.map_center(), Some(LatLng { lat: 10.0, lng: 20.0 }));
}
