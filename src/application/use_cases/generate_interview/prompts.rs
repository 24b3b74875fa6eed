use crate::domain::interview::{render_value, GenerateInterviewRequest};

pub(crate) const SELF_CHECK_PROMPT: &str = "Are you sure? Think carefully.";

pub(crate) fn build_questions_prompt(request: &GenerateInterviewRequest) -> String {
    format!(
        r#"Prepare questions for a job interview.
The job role is {role}.
The job experience level is {level}.
The tech stack used in the job is: {techstack}.
The focus between behavioural and technical questions should lean towards: {interview_type}.
The amount of questions required is: {amount}.
Return exactly {amount} questions.
The questions are going to be read by a voice assistant, so do not use any punctuation or special characters at all. Use only letters and spaces.
Do not number the questions and do not add explanations.
Return strictly a JSON array of plain strings and nothing else, with no text before or after it, formatted like this:
["Question one", "Question two", "Question three"]"#,
        role = render_value(request.role.as_ref()),
        level = render_value(request.level.as_ref()),
        techstack = render_value(request.techstack.as_ref()),
        interview_type = render_value(request.interview_type.as_ref()),
        amount = render_value(request.amount.as_ref()),
    )
}
