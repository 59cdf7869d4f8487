use anyhow::Result;
use bella_vista_page::{
    FieldValidator, FormSchema, PageConfig, SubmissionController, SubmissionState,
    SubmissionTicket,
};
use std::collections::HashMap;
use std::time::Duration;

/// Walks a contact form submission through validation and the timed
/// send/reset sequence, printing each lifecycle step.
#[tokio::main]
async fn main() -> Result<()> {
    let validator = FieldValidator::new(FormSchema::contact_form())?;
    let controller = SubmissionController::new(validator, PageConfig::accelerated());

    let mut values = HashMap::new();
    values.insert("name".to_string(), "Ada Lovelace".to_string());
    values.insert("email".to_string(), "ada@example.com".to_string());
    values.insert("phone".to_string(), "12025550144".to_string());
    values.insert(
        "message".to_string(),
        "Table for two on Friday evening, please.".to_string(),
    );

    // First attempt with a bad email to show per-field reporting
    let mut bad_values = values.clone();
    bad_values.insert("email".to_string(), "ada@example".to_string());

    println!("Submitting with an invalid email...");
    match controller.submit(&bad_values).await {
        SubmissionTicket::Rejected { report } => {
            for field in report.invalid_fields() {
                println!("  {}: {}", field, report.message_for(field).unwrap_or(""));
            }
        }
        _ => println!("  unexpected outcome"),
    }

    println!("Submitting with all fields valid...");
    let ticket = controller.submit(&values).await;
    if let SubmissionTicket::Accepted { handle, .. } = &ticket {
        println!("  accepted, attempt {}", handle.internal_id());
    }

    loop {
        let state = controller.state().await;
        let button = controller.button().await;
        println!("  state: {:?}  button: {:?}", state, button.label);

        if state == SubmissionState::Idle {
            break;
        }
        tokio::time::sleep(Duration::from_millis(15)).await;
    }

    println!("Form reset to its initial state.");
    Ok(())
}
