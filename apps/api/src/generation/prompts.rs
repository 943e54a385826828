// The fixed instructional prompt for resume generation.
// The record's pretty-printed JSON replaces {resume_json} before sending.

pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer and career coach.
I will provide you with a user's career details in JSON format.
Your task is to write a professional, high-impact resume in Markdown format.

Guidelines:
1. Use a clean, professional Markdown structure.
2. Start with a header containing Name and Contact info.
3. Write a compelling Professional Summary based on the provided details.
4. For Experience: enhance the descriptions to be action-oriented (using strong verbs like Spearheaded, Developed, Optimized). Focus on achievements.
5. Format Skills as a clean list or grouped logically.
6. Do not include markdown code block fences (like ```markdown). Just return the raw markdown text.
7. Ensure the tone is professional and suitable for ATS (Applicant Tracking Systems).

User Data:
{resume_json}"#;
