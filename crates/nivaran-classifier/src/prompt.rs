// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for model-backed classification.

/// Build the classification instruction for a complaint text.
///
/// The prompt pins the output contract (bare two-field JSON, no prose, no
/// code fences) and spells out priority and department keyword guidance in
/// both supported languages, so model and fallback verdicts stay aligned.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You are a civic complaint triage assistant for a city grievance system.
Analyze the complaint below and assign a priority and a responsible department.
The complaint may be written in English or Malayalam.

Priority rules:
- high: accident, injury, death, fire, emergency, hospital, ambulance (അപകടം, പരിക്ക്, മരണം, തീപിടുത്തം, അടിയന്തിരം, ആശുപത്രി, ആംബുലൻസ്)
- medium: electricity, water, road damage, traffic (വൈദ്യുതി, വെള്ളം, റോഡ് തകരാർ, ഗതാഗതം)
- low: garbage, cleanliness, noise, stray animals (മാലിന്യം, ശുചിത്വം, ശബ്ദം, തെരുവ് മൃഗങ്ങൾ)

Department rules:
- Police: crime, theft, violence (കുറ്റകൃത്യം, മോഷണം, അക്രമം)
- Health: hospital, injury, ambulance (ആശുപത്രി, മുറിവ്, ആംബുലൻസ്)
- Electricity: power failure, transformer, electric shock (വൈദ്യുതി, ട്രാൻസ്ഫോർമർ, ഷോക്ക്)
- Water: water supply, pipeline, leak (ജലവിതരണം, പൈപ്പ്, ചോർച്ച)
- Transport: road, traffic, accident (റോഡ്, ഗതാഗതം, അപകടം)
- Municipality: garbage, cleanliness, waste, everything else (മാലിന്യം, ശുചിത്വം)

priority must be exactly one of: "high", "medium", "low"
department must be exactly one of: "Police", "Health", "Electricity", "Water", "Municipality", "Transport"

Respond with ONLY a JSON object in exactly this form, no markdown, no explanation:
{{"priority": "high", "department": "Police"}}

Complaint: {text}"#
    )
}
