//! Structured Feature Integration Tests
//!
//! Drives the vision, roadmap and quiz services end to end against the
//! scripted provider:
//! - Prompt content reaching the backend
//! - Extraction and typing of the JSON payload
//! - Failure wrapping for every pipeline error kind

use std::sync::Arc;

use edumorph::services::prompts::templates::APPLICATION_VISION_TEMPLATE;
use edumorph::{
    ApplicationVisionService, Difficulty, Feature, FeatureError, GenerationError, JsonShape,
    Persona, QuizGeneratorService, QuizParams, RoadmapCreatorService, RoadmapParams, SkillLevel,
    TimeCommitment, VisionParams,
};
use edumorph_llm::{LlmError, ScriptedProvider, ScriptedReply};

fn template_example_output() -> &'static str {
    let start = APPLICATION_VISION_TEMPLATE
        .find("Example Output:")
        .expect("template has an example");
    &APPLICATION_VISION_TEMPLATE[start..]
}

const ROADMAP_RESPONSE: &str = r#"Here is your roadmap:
```json
{
  "title": "Customized Learning Path for Rust",
  "description": "Comprehensive roadmap to master Rust from fundamentals to advanced concepts",
  "totalDays": 45,
  "totalMilestones": 2,
  "category": "Programming",
  "milestones": [
    {"title": "Fundamentals & Setup", "description": "Toolchain, syntax, ownership",
     "estimatedDays": 14, "topics": ["cargo", "ownership", "borrowing"],
     "difficulty": "Beginner", "icon": "BookOpen"},
    {"title": "Concurrency", "description": "Threads, channels and async",
     "estimatedDays": 21, "topics": ["threads", "tokio"],
     "difficulty": "Advanced", "icon": "Cpu"}
  ]
}
```"#;

const QUIZ_RESPONSE: &str = r#"[
  {"question": "What is the time complexity of binary search?",
   "options": ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
   "correctAnswer": 1, "explanation": "The search space halves each step.", "difficulty": "medium"},
  {"question": "Which structure gives FIFO order?",
   "options": ["Stack", "Queue", "Heap", "Tree"],
   "correctAnswer": 1, "explanation": "Queues are first-in first-out.", "difficulty": "easy"}
]"#;

fn service_parts(reply: ScriptedReply) -> (Arc<ScriptedProvider>, Arc<dyn edumorph_llm::LlmProvider>) {
    let provider = Arc::new(ScriptedProvider::new(vec![reply]));
    let dynamic: Arc<dyn edumorph_llm::LlmProvider> = provider.clone();
    (provider, dynamic)
}

// ============================================================================
// Application Vision
// ============================================================================

#[tokio::test]
async fn test_refraction_scenario() {
    let (provider, backend) = service_parts(ScriptedReply::text(template_example_output()));
    let service = ApplicationVisionService::new(backend);

    let vision = service
        .generate(&VisionParams {
            concept: "Refraction".to_string(),
            persona: Persona::Default,
        })
        .await
        .unwrap();

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Concept: Refraction"));
    assert_eq!(vision.use_cases.len(), 3);
    assert_eq!(vision.tools.len(), 3);
    assert_eq!(vision.industries.len(), 4);
    assert!(vision.mini_project.contains("HTML Canvas"));
}

#[tokio::test]
async fn test_vision_missing_field_is_schema_error() {
    let (_, backend) = service_parts(ScriptedReply::text(
        r#"{"useCases": ["a"], "tools": [], "industries": []}"#,
    ));
    let err = ApplicationVisionService::new(backend)
        .generate(&VisionParams {
            concept: "Entropy".to_string(),
            persona: Persona::Researcher,
        })
        .await
        .unwrap_err();

    assert_eq!(err.feature(), Feature::ApplicationVision);
    assert!(matches!(err.cause(), GenerationError::Schema(_)));
}

#[tokio::test]
async fn test_vision_error_kinds_are_wrapped() {
    let cases = vec![
        (ScriptedReply::Empty, "empty"),
        (
            ScriptedReply::Error(LlmError::RateLimited {
                message: "quota".to_string(),
            }),
            "backend",
        ),
        (ScriptedReply::text("I cannot answer that."), "extraction"),
        (ScriptedReply::text("{ useCases: nope }"), "parse"),
    ];

    for (reply, kind) in cases {
        let (_, backend) = service_parts(reply);
        let err = ApplicationVisionService::new(backend)
            .generate(&VisionParams {
                concept: "Torque".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        let FeatureError::GenerationFailed { feature, source } = &err;
        assert_eq!(*feature, Feature::ApplicationVision);
        let matched = match kind {
            "empty" => matches!(source, GenerationError::EmptyResponse),
            "backend" => matches!(source, GenerationError::Backend(LlmError::RateLimited { .. })),
            "extraction" => matches!(
                source,
                GenerationError::Extraction {
                    expected: JsonShape::Object
                }
            ),
            "parse" => matches!(source, GenerationError::Parse(_)),
            _ => false,
        };
        assert!(matched, "{}: got {:?}", kind, source);
    }
}

// ============================================================================
// Roadmap
// ============================================================================

#[tokio::test]
async fn test_roadmap_generation_and_tracking() {
    let (provider, backend) = service_parts(ScriptedReply::text(ROADMAP_RESPONSE));
    let service = RoadmapCreatorService::new(backend);

    let roadmap = service
        .generate_tracked(&RoadmapParams {
            learning_goal: "Rust".to_string(),
            level: SkillLevel::Advanced,
            time_commitment: TimeCommitment::FullTime,
        })
        .await
        .unwrap();

    assert!(provider.prompts()[0].contains("Learning Goal: Rust\nCurrent Level: advanced"));
    assert_eq!(roadmap.total_milestones, 2);
    assert_eq!(roadmap.completed_milestones, 0);
    assert_eq!(roadmap.milestones[1].id, "milestone-1");
    // Reported total is not reconciled with the 35 estimated days
    assert_eq!(roadmap.total_days, 45);
}

// ============================================================================
// Quiz
// ============================================================================

#[tokio::test]
async fn test_quiz_prompt_and_answer_indices() {
    let (provider, backend) = service_parts(ScriptedReply::text(QUIZ_RESPONSE));
    let service = QuizGeneratorService::new(backend);

    let questions = service
        .generate(&QuizParams {
            topic: "algorithms".to_string(),
            difficulty: Difficulty::Medium,
            count: 5,
        })
        .await
        .unwrap();

    let prompt = &provider.prompts()[0];
    assert!(prompt.contains("algorithms"));
    assert!(prompt.contains("5"));

    assert_eq!(questions.len(), 2);
    for q in &questions {
        assert!(q.correct_answer < q.options.len());
    }
    assert_eq!(questions[1].difficulty, Difficulty::Easy);
}

#[tokio::test]
async fn test_quiz_out_of_range_answer_is_rejected() {
    let (_, backend) = service_parts(ScriptedReply::text(
        r#"Sure: [{"question": "q", "options": ["a", "b"], "correctAnswer": 2,
                  "explanation": "e", "difficulty": "hard"}]"#,
    ));
    let err = QuizGeneratorService::new(backend)
        .generate(&QuizParams {
            topic: "sets".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.feature(), Feature::Quiz);
    assert!(matches!(err.cause(), GenerationError::Schema(_)));
}

#[tokio::test]
async fn test_quiz_object_instead_of_array_is_extraction_error() {
    let (_, backend) = service_parts(ScriptedReply::text(r#"{"question": "only one"}"#));
    let err = QuizGeneratorService::new(backend)
        .generate(&QuizParams::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err.cause(),
        GenerationError::Extraction {
            expected: JsonShape::Array
        }
    ));
}
