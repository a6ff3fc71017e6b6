mod openai_client;

pub use openai_client::OpenAiCompletionClient;
