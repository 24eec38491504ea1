use aws_sdk_sesv2::Client as SesClient;

use crate::error::{AppError, Result};
use crate::models::Order;

/// Sends the order-confirmation mail for a web checkout. Addressed to the
/// fixed administrative mailbox until the customer-facing sender domain is
/// verified.
pub async fn send_order_confirmation(
    ses_client: &SesClient,
    sender_email: &str,
    recipient: &str,
    order: &Order,
) -> Result<()> {
    let html_template = include_str!("order_confirmation.html");

    let items_rows: String = order
        .items
        .iter()
        .map(|line| {
            format!(
                "<tr><td class=\"item-name\">{}</td>\
                 <td style=\"text-align: center;\" class=\"item-qty\">x{}</td>\
                 <td style=\"text-align: right;\">₹{}</td></tr>",
                line.name, line.quantity, line.price
            )
        })
        .collect();

    let html = html_template
        .replace("{{customer_name}}", &order.customer_name)
        .replace("{{customer_mobile}}", &order.customer_mobile)
        .replace("{{customer_address}}", &order.customer_address)
        .replace("{{items_rows}}", &items_rows)
        .replace("{{total_amount}}", &order.total_amount.to_string())
        .replace("{{year}}", &chrono::Utc::now().format("%Y").to_string());

    let destination = aws_sdk_sesv2::types::Destination::builder()
        .to_addresses(recipient)
        .build();

    let subject = aws_sdk_sesv2::types::Content::builder()
        .data("Order Confirmation - Sri Sai Cottage Industries")
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build subject: {}", e)))?;

    let html_body = aws_sdk_sesv2::types::Content::builder()
        .data(html)
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTML body: {}", e)))?;

    let body = aws_sdk_sesv2::types::Body::builder().html(html_body).build();

    let message = aws_sdk_sesv2::types::Message::builder()
        .subject(subject)
        .body(body)
        .build();

    let content = aws_sdk_sesv2::types::EmailContent::builder()
        .simple(message)
        .build();

    ses_client
        .send_email()
        .from_email_address(sender_email)
        .destination(destination)
        .content(content)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to send email: {:?}", e);
            AppError::InternalError("Failed to send order confirmation email".to_string())
        })?;

    Ok(())
}
