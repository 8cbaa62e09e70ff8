use arriendo_core::api::NotificationSource;
use arriendo_core::OwnerId;

use crate::commands::common::{
    build_client, format_notification_lines, notification_to_list_item, resolve_owner,
    NotificationListItem,
};
use crate::error::CliError;

pub async fn run_notifications(
    api_url: Option<&str>,
    owner: Option<OwnerId>,
    as_json: bool,
) -> Result<(), CliError> {
    let owner = resolve_owner(owner)?;
    let client = build_client(api_url)?;
    let notifications = client.fetch_unread(owner).await?;

    if as_json {
        let json_items = notifications
            .iter()
            .map(notification_to_list_item)
            .collect::<Vec<NotificationListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_notification_lines(&notifications) {
            println!("{line}");
        }
    }

    Ok(())
}
