// src/services/catalog.rs

use crate::models::quiz::{PublicQuiz, Question, Quiz};

/// Owns every quiz definition, answer keys included.
#[derive(Debug, Default)]
pub struct QuizCatalog {
    quizzes: Vec<Quiz>,
}

impl QuizCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new quiz and returns it with its answer key.
    ///
    /// Questions are kept verbatim. Id uniqueness is the caller's concern;
    /// lookups return the first quiz stored under an id.
    pub fn create_quiz(&mut self, id: i64, title: String, questions: Vec<Question>) -> Quiz {
        let quiz = Quiz {
            id,
            title,
            questions,
        };
        self.quizzes.push(quiz.clone());

        tracing::info!(
            "Quiz {} created with {} questions",
            quiz.id,
            quiz.questions.len()
        );
        quiz
    }

    pub fn get_quiz_by_id(&self, id: i64) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// Projects a quiz for end users, dropping every `correct_option`.
    pub fn sanitize_for_client(quiz: &Quiz) -> PublicQuiz {
        PublicQuiz::from(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, correct_option: i64) -> Question {
        Question {
            id,
            text: format!("Q{}", id),
            options: vec!["a".to_string(), "b".to_string()],
            correct_option,
        }
    }

    #[test]
    fn test_create_and_fetch_quiz() {
        let mut catalog = QuizCatalog::new();
        let created = catalog.create_quiz(1, "T".to_string(), vec![question(1, 0)]);

        let fetched = catalog.get_quiz_by_id(1).expect("quiz stored");
        assert_eq!(fetched, &created);
        assert_eq!(fetched.questions[0].correct_option, 0);
    }

    #[test]
    fn test_missing_quiz_is_none() {
        let catalog = QuizCatalog::new();
        assert!(catalog.get_quiz_by_id(42).is_none());
    }

    #[test]
    fn test_questions_are_copied_verbatim() {
        // Out-of-range answer, empty options and repeated ids are all accepted.
        let odd = Question {
            id: 7,
            text: String::new(),
            options: vec![],
            correct_option: 9,
        };
        let mut catalog = QuizCatalog::new();
        let quiz = catalog.create_quiz(2, "Odd".to_string(), vec![odd.clone(), odd.clone()]);

        assert_eq!(quiz.questions, vec![odd.clone(), odd]);
    }

    #[test]
    fn test_duplicate_id_returns_first_quiz() {
        let mut catalog = QuizCatalog::new();
        catalog.create_quiz(1, "First".to_string(), vec![]);
        catalog.create_quiz(1, "Second".to_string(), vec![]);

        assert_eq!(catalog.get_quiz_by_id(1).unwrap().title, "First");
    }

    #[test]
    fn test_sanitized_quiz_has_no_correct_option() {
        let mut catalog = QuizCatalog::new();
        let quiz = catalog.create_quiz(
            1,
            "T".to_string(),
            vec![question(1, 0), question(2, 1), question(3, 1)],
        );

        let public = QuizCatalog::sanitize_for_client(&quiz);
        let json = serde_json::to_value(&public).unwrap();

        assert_eq!(json["title"], "T");
        let questions = json["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
        for q in questions {
            assert!(q.get("correct_option").is_none());
            assert_eq!(q["options"], serde_json::json!(["a", "b"]));
        }
    }
}
