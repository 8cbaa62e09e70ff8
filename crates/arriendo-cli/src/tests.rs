use std::time::{SystemTime, UNIX_EPOCH};

use arriendo_core::models::{Notification, Residence};
use arriendo_core::notifications::format_notification;
use arriendo_core::sync::ListingState;
use arriendo_core::{NotificationId, ResidenceId};
use pretty_assertions::assert_eq;

use crate::cli::CompletionShell;
use crate::commands::common::{
    format_notification_age, format_notification_lines, format_residence_lines,
    notification_to_list_item, parse_notification_id, parse_residence_id, residence_to_list_item,
    resolve_api_url, text_preview,
};
use crate::commands::completions::run_completions;
use crate::commands::watch::render_state_lines;
use crate::error::CliError;

fn residence(id: i64, monthly_price: f64, description: &str) -> Residence {
    serde_json::from_str(&format!(
        r#"{{
            "id": {id},
            "precio_mensual": {monthly_price},
            "descripcion": "{description}",
            "habitaciones": 2,
            "banos": 1
        }}"#
    ))
    .unwrap()
}

fn unread(id: i64, name: &str) -> Notification {
    Notification {
        id: NotificationId::new(id),
        read: false,
        data: format!(r#"{{"nombre": "{name}"}}"#),
        created_at: None,
    }
}

#[test]
fn resolve_api_url_prefers_the_flag() {
    let resolved = resolve_api_url(Some("  https://api.example.com  ")).unwrap();
    assert_eq!(resolved, "https://api.example.com");
}

#[test]
fn parse_residence_id_accepts_digits_only() {
    assert_eq!(parse_residence_id(" 7 ").unwrap(), ResidenceId::new(7));
    assert!(matches!(
        parse_residence_id("seven"),
        Err(CliError::InvalidResidenceId(_))
    ));
}

#[test]
fn parse_notification_id_accepts_digits_only() {
    assert_eq!(
        parse_notification_id("12").unwrap(),
        NotificationId::new(12)
    );
    assert!(matches!(
        parse_notification_id(""),
        Err(CliError::InvalidNotificationId(_))
    ));
}

#[test]
fn text_preview_collapses_whitespace_onto_one_line() {
    assert_eq!(
        text_preview("  two   words \nsecond line", 40),
        "two words second line"
    );
}

#[test]
fn text_preview_truncates_at_word_boundaries() {
    assert_eq!(
        text_preview("a very long description that keeps going", 20),
        "a very long..."
    );
    // a single over-long word is hard-cut
    assert_eq!(text_preview("unbroken-amenity-listing-token", 10), "unbroke...");
}

#[test]
fn format_notification_age_counts_fresh_interest() {
    let now = 864_000_000; // ten days past the epoch
    assert_eq!(format_notification_age(now - 30_000, now), "moments ago");
    assert_eq!(format_notification_age(now - 120_000, now), "2m ago");
    assert_eq!(format_notification_age(now - 2 * 60 * 60_000, now), "2h ago");
    assert_eq!(format_notification_age(now - 3 * 24 * 60 * 60_000, now), "3d ago");
}

#[test]
fn format_notification_age_dates_stale_interest() {
    let now = 864_000_000;
    assert_eq!(format_notification_age(0, now), "1970-01-01");
}

#[test]
fn format_residence_lines_shows_price_layout_and_preview() {
    let lines = format_residence_lines(&[residence(7, 300.0, "Bright flat near the river")]);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("7"));
    assert!(lines[0].contains("$300/mo"));
    assert!(lines[0].contains("2bd/1ba"));
    assert!(lines[0].contains("Bright flat near the river"));
}

#[test]
fn format_notification_lines_name_the_tenant() {
    let lines = format_notification_lines(&[unread(12, "Ana Ruiz")]);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("12"));
    assert!(lines[0].contains("Ana Ruiz is interested in one of your properties"));
}

#[test]
fn residence_list_item_passes_photos_through() {
    let mut listing = residence(7, 300.0, "Flat");
    listing.photos = vec!["7/front.jpg".to_string()];

    let item = residence_to_list_item(&listing);
    assert_eq!(item.id, 7);
    assert_eq!(item.photos, vec!["7/front.jpg"]);
}

#[test]
fn notification_list_item_carries_the_decoded_tenant() {
    let item = notification_to_list_item(&unread(12, "Ana Ruiz"));

    assert_eq!(item.id, 12);
    assert_eq!(item.title, "New rental interest");
    assert_eq!(item.age, None);
    assert_eq!(item.tenant.tenant_name.as_deref(), Some("Ana Ruiz"));
}

#[test]
fn render_state_lines_announces_loading_then_listing() {
    let loading = ListingState {
        loading: true,
        ..ListingState::default()
    };
    assert_eq!(
        render_state_lines(&loading, &ListingState::default()),
        vec!["Loading listings...".to_string()]
    );

    let loaded = ListingState {
        residences: vec![residence(7, 300.0, "Flat")],
        ..ListingState::default()
    };
    let lines = render_state_lines(&loaded, &loading);
    assert_eq!(lines[0], "1 residence(s) listed");
    assert!(lines[1].contains("$300/mo"));
}

#[test]
fn render_state_lines_reports_load_failure_once() {
    let failed = ListingState {
        load_error: Some("Rental API error: boom (500)".to_string()),
        ..ListingState::default()
    };

    let lines = render_state_lines(&failed, &ListingState::default());
    assert_eq!(lines, vec!["Load failed: Rental API error: boom (500)"]);

    // unchanged error is not repeated
    assert!(render_state_lines(&failed, &failed).is_empty());
}

#[test]
fn render_state_lines_surfaces_only_new_notification_heads() {
    let head = format_notification(&unread(12, "Ana Ruiz"));
    let with_head = ListingState {
        current_notification: Some(head),
        ..ListingState::default()
    };

    let lines = render_state_lines(&with_head, &ListingState::default());
    assert_eq!(
        lines,
        vec!["[12] New rental interest: Ana Ruiz is interested in one of your properties"]
    );

    assert!(render_state_lines(&with_head, &with_head).is_empty());

    let cleared = render_state_lines(&ListingState::default(), &with_head);
    assert_eq!(cleared, vec!["No pending notifications"]);
}

#[test]
fn render_state_lines_skips_unchanged_residences() {
    let steady = ListingState {
        residences: vec![residence(7, 300.0, "Flat")],
        ..ListingState::default()
    };
    assert!(render_state_lines(&steady, &steady).is_empty());
}

#[test]
fn run_completions_writes_bash_script_file() {
    let output_path = std::env::temp_dir().join(format!(
        "arriendo-completions-test-{}.bash",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_nanos())
    ));

    run_completions(CompletionShell::Bash, Some(&output_path)).unwrap();

    let script = std::fs::read_to_string(&output_path).unwrap();
    assert!(script.contains("_arriendo()"));
    assert!(script.contains("complete -F _arriendo"));

    let _ = std::fs::remove_file(output_path);
}
