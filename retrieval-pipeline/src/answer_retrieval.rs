use async_openai::{
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
};
use common::{corpus::Corpus, error::AppError};

pub const SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// Upper bound on generated tokens per answer.
pub const MAX_COMPLETION_TOKENS: u32 = 500;

pub const TEMPERATURE: f32 = 0.7;

/// Horizontal rule placed before and after the book content in the prompt.
pub const CONTEXT_DELIMITER: &str = "---";

/// Builds the user prompt: preamble, delimited book content, grounding
/// instructions, then the question followed by the answer cue.
pub fn build_prompt(specialization: &str, corpus: &Corpus, question: &str) -> String {
    format!(
        "You are an AI assistant specialized in {specialization}.
You have access to the following textbook content:

{CONTEXT_DELIMITER}
{corpus}
{CONTEXT_DELIMITER}

Based on the textbook content provided above, answer the following question.
If the answer is not available in the provided text, state that there is not enough information in the textbook to answer.
Do not make up information.

Question: {question}

Answer:"
    )
}

pub fn create_chat_request(
    model: &str,
    user_message: String,
) -> Result<CreateChatCompletionRequest, OpenAIError> {
    CreateChatCompletionRequestArgs::default()
        .model(model)
        .messages([
            ChatCompletionRequestSystemMessage::from(SYSTEM_MESSAGE).into(),
            ChatCompletionRequestUserMessage::from(user_message).into(),
        ])
        .max_tokens(MAX_COMPLETION_TOKENS)
        .temperature(TEMPERATURE)
        .build()
}

pub fn process_llm_response(response: CreateChatCompletionResponse) -> Result<String, AppError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(AppError::LLMParsing(
            "No content found in LLM response".into(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn response_from(body: Value) -> CreateChatCompletionResponse {
        serde_json::from_value(body).expect("Failed to deserialize completion response")
    }

    #[test]
    fn test_prompt_sections_in_order() {
        let corpus = Corpus::new("The sky is blue.");
        let prompt = build_prompt(
            "Physical AI & Humanoid Robotics",
            &corpus,
            "What color is the sky?",
        );

        let preamble = prompt
            .find("You are an AI assistant specialized in Physical AI & Humanoid Robotics.")
            .expect("preamble missing");
        let context = prompt
            .find("---\nThe sky is blue.\n---")
            .expect("delimited corpus missing");
        let instruction = prompt
            .find("not enough information")
            .expect("grounding instruction missing");
        let question = prompt
            .find("Question: What color is the sky?")
            .expect("question missing");
        let cue = prompt.rfind("Answer:").expect("answer cue missing");

        assert!(preamble < context);
        assert!(context < instruction);
        assert!(instruction < question);
        assert!(question < cue);
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_chat_request_shape() {
        let request = create_chat_request("gpt-3.5-turbo", "prompt body".to_string())
            .expect("request should build");
        let body = serde_json::to_value(&request).expect("request should serialize");

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 500);
        let temperature = body["temperature"].as_f64().expect("temperature missing");
        assert!((temperature - 0.7).abs() < 1e-6);

        let messages = body["messages"].as_array().expect("messages missing");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_MESSAGE);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "prompt body");
    }

    #[test]
    fn test_process_response_takes_first_choice() {
        let response = response_from(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-3.5-turbo",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Blue."},
                    "finish_reason": "stop"
                },
                {
                    "index": 1,
                    "message": {"role": "assistant", "content": "Azure."},
                    "finish_reason": "stop"
                }
            ]
        }));

        assert_eq!(process_llm_response(response).expect("content expected"), "Blue.");
    }

    #[test]
    fn test_process_response_without_choices_is_malformed() {
        let response = response_from(json!({
            "id": "chatcmpl-2",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-3.5-turbo",
            "choices": []
        }));

        let err = process_llm_response(response).expect_err("empty choices must fail");
        assert!(matches!(err, AppError::LLMParsing(_)));
    }

    #[test]
    fn test_process_response_without_content_is_malformed() {
        let response = response_from(json!({
            "id": "chatcmpl-3",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-3.5-turbo",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": null},
                    "finish_reason": "stop"
                }
            ]
        }));

        assert!(matches!(
            process_llm_response(response),
            Err(AppError::LLMParsing(_))
        ));
    }
}
