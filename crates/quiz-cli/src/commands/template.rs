use quiz_core::{QUESTIONS_PER_ROUND, QuestionSpec, ROUNDS};

const SAMPLE: [(&str, [&str; 4], char); 15] = [
    ("What is the capital of France?", ["Lyon", "Paris", "Nice", "Lille"], 'b'),
    ("How many legs does a spider have?", ["6", "8", "10", "12"], 'b'),
    ("Which planet is known as the Red Planet?", ["Venus", "Jupiter", "Mars", "Mercury"], 'c'),
    ("What is 7 x 8?", ["54", "56", "64", "48"], 'b'),
    ("Which gas do plants absorb from the air?", ["Oxygen", "Nitrogen", "Helium", "Carbon dioxide"], 'd'),
    ("Who wrote 'Hamlet'?", ["Shakespeare", "Dickens", "Austen", "Tolstoy"], 'a'),
    ("What is the largest ocean on Earth?", ["Atlantic", "Indian", "Arctic", "Pacific"], 'd'),
    ("How many continents are there?", ["5", "6", "7", "8"], 'c'),
    ("What is the boiling point of water at sea level in Celsius?", ["90", "100", "110", "120"], 'b'),
    ("Which metal is liquid at room temperature?", ["Mercury", "Iron", "Lead", "Tin"], 'a'),
    ("What is the square root of 81?", ["7", "8", "9", "10"], 'c'),
    ("Which language has the most native speakers?", ["English", "Mandarin", "Spanish", "Hindi"], 'b'),
    ("How many sides does a hexagon have?", ["5", "6", "7", "8"], 'b'),
    ("Which organ pumps blood through the body?", ["Lungs", "Liver", "Heart", "Kidneys"], 'c'),
    ("In which year did humans first land on the Moon?", ["1965", "1969", "1972", "1959"], 'b'),
];

/// A complete example bank, one full game's worth of questions.
pub fn sample_bank() -> Vec<QuestionSpec> {
    debug_assert_eq!(SAMPLE.len(), ROUNDS as usize * QUESTIONS_PER_ROUND);
    SAMPLE
        .iter()
        .map(|(prompt, options, correct)| QuestionSpec::new(*prompt, *options, *correct))
        .collect()
}

pub fn run() -> Result<(), String> {
    let json = serde_json::to_string_pretty(&sample_bank()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
