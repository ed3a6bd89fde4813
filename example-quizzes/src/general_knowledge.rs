use quiz_types::{Question, QuestionOption, QuestionSet, QuestionSetError};

/// Five general-knowledge questions: two single-choice, two multiple-choice and one free-text.
pub fn general_knowledge_questions() -> Vec<Question> {
    vec![
        Question::single(
            "1",
            1,
            "What is the capital of Spain?",
            vec![
                QuestionOption::keyed("barcelona", "Barcelona"),
                QuestionOption::keyed("madrid", "Madrid"),
                QuestionOption::keyed("valencia", "Valencia"),
                QuestionOption::keyed("sevilla", "Sevilla"),
            ],
            "madrid",
        )
        .with_description("Pick the correct answer")
        .with_explanation("Madrid is the capital and the most populous city of Spain."),
        Question::multiple(
            "2",
            2,
            "Which of these are programming languages?",
            vec![
                QuestionOption::keyed("javascript", "JavaScript"),
                QuestionOption::keyed("html", "HTML"),
                QuestionOption::keyed("python", "Python"),
                QuestionOption::keyed("css", "CSS"),
            ],
            ["javascript", "python"],
        )
        .with_description("Pick every correct option")
        .with_explanation(
            "JavaScript and Python are programming languages. HTML is a markup language and CSS a style sheet language.",
        ),
        Question::text("3", 3, "In which year was Google founded?", "1998")
            .with_description("Type the year")
            .with_placeholder("e.g. 1998")
            .with_explanation("Google was founded in 1998 by Larry Page and Sergey Brin."),
        Question::single(
            "4",
            4,
            "What is the largest planet in the solar system?",
            vec![
                QuestionOption::keyed("earth", "Earth"),
                QuestionOption::keyed("mars", "Mars"),
                QuestionOption::keyed("jupiter", "Jupiter"),
                QuestionOption::keyed("saturn", "Saturn"),
            ],
            "jupiter",
        )
        .with_description("Pick the correct answer")
        .with_explanation("Jupiter is the largest planet in the solar system."),
        Question::multiple(
            "5",
            5,
            "Which of these numbers are prime?",
            vec![
                QuestionOption::keyed("2", "2"),
                QuestionOption::keyed("4", "4"),
                QuestionOption::keyed("7", "7"),
                QuestionOption::keyed("9", "9"),
                QuestionOption::keyed("11", "11"),
            ],
            ["2", "7", "11"],
        )
        .with_description("Pick every prime number")
        .with_explanation("A prime is only divisible by 1 and itself: 2, 7 and 11."),
    ]
}

/// The general-knowledge quiz as a validated question set.
pub fn general_knowledge() -> Result<QuestionSet, QuestionSetError> {
    Ok(QuestionSet::new(general_knowledge_questions())?
        .with_title("General knowledge")
        .with_intro("Five questions. Required questions must be answered before moving on."))
}
