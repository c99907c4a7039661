//! Prompt construction from a message list.
//!
//! Kept in one function so a model-specific chat template can be swapped in
//! without touching the decode loop. The contract is that identical message
//! sequences yield byte-identical prompts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    fn tag(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Concatenates role-tagged blocks in order, ending with a trailing
/// `<|assistant|>\n` to prime generation.
pub fn build_prompt(messages: &[ChatMessage]) -> String {
    let mut prompt = String::new();
    for message in messages {
        prompt.push_str(&format!("<|{}|>\n{}<|end|>\n", message.role.tag(), message.content));
    }
    prompt.push_str("<|assistant|>\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_messages_yield_identical_prompts() {
        let messages = vec![
            ChatMessage { role: Role::System, content: "be concise".to_string() },
            ChatMessage { role: Role::User, content: "hello".to_string() },
        ];
        assert_eq!(build_prompt(&messages), build_prompt(&messages));
    }

    #[test]
    fn prompt_ends_with_assistant_primer() {
        let messages = vec![ChatMessage { role: Role::User, content: "hi".to_string() }];
        let prompt = build_prompt(&messages);
        assert!(prompt.ends_with("<|assistant|>\n"));
    }

    #[test]
    fn prompt_contains_role_tagged_blocks_in_order() {
        let messages = vec![
            ChatMessage { role: Role::System, content: "a".to_string() },
            ChatMessage { role: Role::User, content: "b".to_string() },
        ];
        let prompt = build_prompt(&messages);
        let system_pos = prompt.find("<|system|>").unwrap();
        let user_pos = prompt.find("<|user|>").unwrap();
        assert!(system_pos < user_pos);
    }
}
