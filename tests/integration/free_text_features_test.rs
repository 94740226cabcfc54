//! Free-Text Feature Integration Tests
//!
//! Doubt resolution and streamed concept explanations:
//! - Passthrough of model text
//! - Fragment ordering and accumulation
//! - Concurrent multi-depth explanations

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use edumorph::{
    ChatMessage, ConceptExplainerService, DoubtParams, DoubtResolverService, ExplanationDepth,
    ExplanationParams, Feature, GenerationError, ToneMode,
};
use edumorph_llm::{LlmError, ScriptedProvider, ScriptedReply};

// ============================================================================
// Doubt Resolver
// ============================================================================

#[tokio::test]
async fn test_doubt_answer_is_passed_through() {
    let answer = "**Rayleigh scattering** 🌈 shorter wavelengths scatter more. {not json}";
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::text(answer)]));
    let service = DoubtResolverService::new(provider.clone());

    let text = service
        .resolve(&DoubtParams {
            question: "Why is the sky blue?".to_string(),
            subject: "Physics".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(text, answer);
    assert!(provider.prompts()[0].contains("Student Question: Why is the sky blue?"));
}

#[tokio::test]
async fn test_doubt_empty_question_still_builds_prompt() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::text("Could you clarify?")]));
    let service = DoubtResolverService::new(provider.clone());

    let text = service.resolve(&DoubtParams::default()).await.unwrap();

    assert_eq!(text, "Could you clarify?");
    assert_eq!(provider.call_count(), 1);
    let prompt = &provider.prompts()[0];
    assert!(prompt.contains("Current Subject: General"));
    assert!(prompt.contains("Student Question: \n"));
}

#[tokio::test]
async fn test_doubt_failures_surface_as_generation_failed() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        ScriptedReply::Empty,
        ScriptedReply::Error(LlmError::NetworkError {
            message: "offline".to_string(),
        }),
    ]));
    let service = DoubtResolverService::new(provider);
    let params = DoubtParams {
        question: "What is a monad?".to_string(),
        ..Default::default()
    };

    let err = service.resolve(&params).await.unwrap_err();
    assert_eq!(err.feature(), Feature::DoubtResolver);
    assert!(matches!(err.cause(), GenerationError::EmptyResponse));

    let err = service.resolve(&params).await.unwrap_err();
    assert!(matches!(err.cause(), GenerationError::Backend(_)));
}

#[tokio::test]
async fn test_doubt_conversation_context() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::text("Mitochondria.")]));
    let service = DoubtResolverService::new(provider.clone());
    let history = vec![
        ChatMessage::student("What is a cell?"),
        ChatMessage::tutor("The basic unit of life."),
        ChatMessage::student("What powers it?"),
        ChatMessage::tutor("Organelles."),
    ];

    service
        .resolve_in_conversation("Which organelle?", &history, "Biology")
        .await
        .unwrap();

    let prompt = &provider.prompts()[0];
    assert!(prompt.contains(
        "Conversation Context:\nTutor: The basic unit of life.\nStudent: What powers it?\nTutor: Organelles."
    ));
    assert!(!prompt.contains("What is a cell?"));
}

// ============================================================================
// Concept Explainer
// ============================================================================

#[tokio::test]
async fn test_streaming_accumulation_hello() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::stream(["Hel", "lo"])]));
    let service = ConceptExplainerService::new(provider.clone());

    let mut accumulated = String::new();
    let mut calls = 0;
    let summary = service
        .stream_explanation(
            &ExplanationParams {
                topic: "greetings".to_string(),
                ..Default::default()
            },
            |fragment| {
                accumulated.push_str(fragment);
                calls += 1;
            },
        )
        .await
        .unwrap();

    assert_eq!(accumulated, "Hello");
    assert_eq!(calls, 2);
    assert_eq!(summary.fragments, 2);
}

#[tokio::test]
async fn test_stream_failure_keeps_delivered_text() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::StreamThenError(
        vec!["Arrr! ".to_string()],
        LlmError::ServerError {
            message: "overloaded".to_string(),
            status: Some(503),
        },
    )]));
    let service = ConceptExplainerService::new(provider);

    let mut seen = String::new();
    let err = service
        .stream_explanation(
            &ExplanationParams {
                topic: "tides".to_string(),
                depth: ExplanationDepth::Eli5,
                tone: ToneMode::Pirate,
            },
            |f| seen.push_str(f),
        )
        .await
        .unwrap_err();

    assert_eq!(seen, "Arrr! ");
    assert_eq!(err.feature(), Feature::ConceptExplainer);
}

fn depth_responder(prompt: &str) -> ScriptedReply {
    if prompt.starts_with("Provide a concise summary") {
        ScriptedReply::stream(["short ", "version"])
    } else if prompt.starts_with("Explain ") {
        ScriptedReply::stream(["like ", "you're ", "five"])
    } else {
        ScriptedReply::stream(["# Deep ", "dive"])
    }
}

#[tokio::test]
async fn test_explain_all_depths() {
    let provider = Arc::new(ScriptedProvider::from_fn(depth_responder));
    let service = ConceptExplainerService::new(provider.clone());

    let per_depth: Mutex<HashMap<String, Vec<String>>> = Mutex::new(HashMap::new());
    let set = service
        .explain_all_depths("photosynthesis", &ToneMode::Chef, |depth, fragment| {
            per_depth
                .lock()
                .unwrap()
                .entry(depth.to_string())
                .or_default()
                .push(fragment.to_string());
        })
        .await
        .unwrap();

    assert_eq!(set.tldr, "short version");
    assert_eq!(set.eli5, "like you're five");
    assert_eq!(set.deepdive, "# Deep dive");
    assert_eq!(provider.call_count(), 3);

    let per_depth = per_depth.into_inner().unwrap();
    assert_eq!(per_depth["eli5"], vec!["like ", "you're ", "five"]);
    assert_eq!(per_depth["tldr"], vec!["short ", "version"]);
    for prompt in provider.prompts() {
        assert!(prompt.contains("photosynthesis"));
        assert!(prompt.contains("cooking metaphors"));
    }
}

#[tokio::test]
async fn test_explain_all_depths_fails_if_any_stream_fails() {
    let provider = Arc::new(ScriptedProvider::from_fn(|prompt| {
        if prompt.starts_with("Explain ") {
            ScriptedReply::Error(LlmError::RateLimited {
                message: "quota".to_string(),
            })
        } else {
            ScriptedReply::stream(["ok"])
        }
    }));
    let service = ConceptExplainerService::new(provider);

    let err = service
        .explain_all_depths("gravity", &ToneMode::Default, |_, _| {})
        .await
        .unwrap_err();
    assert_eq!(err.feature(), Feature::ConceptExplainer);
    assert!(matches!(
        err.cause(),
        GenerationError::Backend(LlmError::RateLimited { .. })
    ));
}

#[tokio::test]
async fn test_explain_in_context() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::stream([
        "A heap ",
        "is a tree.",
    ])]));
    let service = ConceptExplainerService::new(provider.clone());

    let text = service
        .explain_in_context(
            "What is a heap?",
            "A heap keeps the smallest element at the root.",
            &ToneMode::Default,
        )
        .await
        .unwrap();

    assert_eq!(text, "A heap is a tree.");
    let prompt = &provider.prompts()[0];
    assert!(prompt.starts_with(
        "Provide a comprehensive explanation of Concept: What is a heap?\nQuestion Context: A heap keeps"
    ));
}
