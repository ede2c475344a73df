//! Static tool catalog
use crate::protocol::ToolDescriptor;

/// Tool names exposed by this server
pub mod tool_names {
    pub const GET_ALL_PATIENTS: &str = "get_all_patients";
    pub const GET_PATIENT_BY_ID: &str = "get_patient_by_id";
    pub const GENERATE_PRESCRIPTION: &str = "generate_prescription";
    pub const GET_PRESCRIPTION_HISTORY: &str = "get_prescription_history";
}

/// Registry of available tools.
///
/// Computed once at startup and never mutated afterwards. Descriptors live
/// in a `Vec` so `tools/list` returns an ordered, stable sequence.
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Build the fixed catalog.
    pub fn new() -> Self {
        let tools = vec![
            ToolDescriptor {
                name: tool_names::GET_ALL_PATIENTS.to_string(),
                description: "List all patients".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            },
            ToolDescriptor {
                name: tool_names::GET_PATIENT_BY_ID.to_string(),
                description: "Get one patient by ID".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "patient_id": {
                            "type": "string",
                            "description": "Patient ID"
                        }
                    },
                    "required": ["patient_id"]
                }),
            },
            ToolDescriptor {
                name: tool_names::GENERATE_PRESCRIPTION.to_string(),
                description: "Create a prescription based on symptoms".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "patient_id": { "type": "string" },
                        "symptoms": { "type": "string" },
                        "final_prescription": { "type": "string" }
                    },
                    "required": ["patient_id", "symptoms"]
                }),
            },
            ToolDescriptor {
                name: tool_names::GET_PRESCRIPTION_HISTORY.to_string(),
                description: "Read the prescription log".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            },
        ];

        Self { tools }
    }

    /// List all tool descriptors in declaration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_fixed_and_ordered() {
        let registry = ToolRegistry::new();
        let names: Vec<_> = registry.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "get_all_patients",
                "get_patient_by_id",
                "generate_prescription",
                "get_prescription_history",
            ]
        );
    }

    #[test]
    fn names_are_unique() {
        let registry = ToolRegistry::new();
        let mut names: Vec<_> = registry.list().iter().map(|t| t.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), registry.list().len());
    }

    #[test]
    fn required_parameters_are_declared() {
        let registry = ToolRegistry::new();
        let generate = registry
            .list()
            .iter()
            .find(|t| t.name == tool_names::GENERATE_PRESCRIPTION)
            .unwrap();
        let required = generate.input_schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(required, vec!["patient_id", "symptoms"]);
    }
}
