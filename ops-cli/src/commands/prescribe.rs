// One-shot prescription generation through the MCP channel
use anyhow::{bail, Context};
use mcp_server::{ContentBlock, McpClient};

pub async fn run(
    server_bin: &str,
    patient_id: &str,
    symptoms: &str,
    final_prescription: Option<&str>,
) -> anyhow::Result<()> {
    if symptoms.trim().is_empty() {
        bail!("Symptoms must not be empty");
    }

    let client = McpClient::spawn(server_bin, &[])
        .await
        .context("Failed to start the MCP server")?;

    let result = client
        .call_tool(
            "generate_prescription",
            serde_json::json!({
                "patient_id": patient_id,
                "symptoms": symptoms,
                "final_prescription": final_prescription,
            }),
        )
        .await?;

    if let Some(error) = result.error {
        bail!("{} failure: {}", error.kind, error.message);
    }

    let Some(ContentBlock::Json { json }) = result.content.into_iter().next() else {
        bail!("Server returned no prescription payload");
    };
    let prescription = json
        .get("prescription")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();

    println!("\n=== Prescription ===\n");
    println!("{prescription}");
    Ok(())
}
