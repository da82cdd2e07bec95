pub fn rfp_prompt(description: &str) -> String {
    format!(
        r#"You are an assistant that converts procurement descriptions into VALID JSON only.

Required JSON format:

{{
  "title": string,
  "budget": number | null,
  "deliveryDeadline": string | null,
  "paymentTerms": string | null,
  "warrantyMinMonths": number | null,
  "items": [
    {{
      "name": string,
      "quantity": number,
      "specs": object
    }}
  ]
}}

Do NOT add explanations, markdown, or extra text. Only return JSON.

Description:
"""{description}"""
"#
    )
}

pub fn proposal_prompt(raw_text: &str) -> String {
    format!(
        r#"You are parsing a vendor proposal reply to a request for proposal.

Extract the following as JSON, with no explanations, markdown, or extra text:

{{
  "totalPrice": number | null,
  "currency": string | null,
  "deliveryDays": number | null,
  "warrantyYears": number | null,
  "paymentTerms": string | null,
  "summary": string
}}

Proposal text:
"""{raw_text}"""
"#
    )
}
