//! Bundled campus content used when no config file is supplied.

use crate::directory::DirectoryConfig;
use crate::models::{ContactEntry, IntentRule};

pub const ANTI_RAGGING_HELPLINE: &str = "+91-1800-180-5522";

pub fn campus_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(
            "mess_menu",
            &["mess", "menu", "food"],
            "🍴 You can check the **Mess Menu** section for today's breakfast, lunch, and dinner!",
        ),
        IntentRule::new(
            "anti_ragging",
            &["ragging", "anti", "help"],
            "🚨 **Anti-Ragging Helpline:** +91-1800-180-5522. You can also find campus squad contacts in the **Contacts** section.",
        ),
        IntentRule::new(
            "class_schedule",
            &["class", "schedule", "time"],
            "📅 Go to the **Class Schedule** section to see your lectures and room numbers.",
        ),
    ]
}

pub fn default_greetings() -> Vec<String> {
    vec!["hi".to_string(), "hello".to_string()]
}

pub fn default_greeting_response() -> String {
    "Hello! How can I help you with campus information today?".to_string()
}

pub fn default_fallback_response() -> String {
    "I'm not quite sure about that. Try asking about 'mess', 'ragging', or a specific teacher's name."
        .to_string()
}

pub fn campus_directory() -> DirectoryConfig {
    DirectoryConfig {
        office: vec![
            ContactEntry::new("IIIT Kalyani Office", "Main Administration", "office@iiitkalyani.ac.in"),
            ContactEntry::new("Prof. Santanu Chattopadhyay", "Director", "director@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Kaoushik K Mukherjee", "Registrar", "Registrar@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Madhumita Sengupta", "Assistant Registrar", "madhumita@iiitkalyani.ac.in"),
            ContactEntry::new("Academics Section", "Examination & Results", "examination@iiitkalyani.ac.in"),
            ContactEntry::new("Finance Office", "Fees & Payments", "payments@iiitkalyani.ac.in"),
        ],
        faculty: vec![
            ContactEntry::new("Dr. Amit Ranjan Azad", "Assistant Professor", "amitranjanazad@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Anirban Lakshman", "Assistant Professor", "anirban@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Bhaskar Biswas", "Assistant Professor", "bhaskar@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Dalia Nandi (Das)", "Associate Professor", "dalia@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Debasish Bera", "Assistant Professor", "debasish@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Imon Mukherjee", "Associate Professor", "imon@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Oishila Bandyopadhyay", "Assistant Professor", "oishila@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Pratik Chakraborty", "Assistant Professor", "pratik@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Rinky Sha", "Assistant Professor", "rinky@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Sanjay Chatterji", "Assistant Professor", "sanjayc@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Sanjoy Pratihar", "Assistant Professor", "sanjoy@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. SK Hafizul Islam", "Associate Professor", "hafi786@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Soumen Pandit", "Assistant Professor", "soumen@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Sudeshna Mondal", "Assistant Professor", "sudeshna@iiitkalyani.ac.in"),
            ContactEntry::new("Dr. Uma Das", "Assistant Professor", "uma@iiitkalyani.ac.in"),
        ],
        student_body: vec![
            ContactEntry::new("Dhanavath Samith Raj", "Vice President", "cse22042@iiitkalyani.ac.in"),
            ContactEntry::new("Anmol Mishra", "Treasurer", "ece22121@iiitkalyani.ac.in"),
            ContactEntry::new("Ayush Prasad", "General Secretary - Tech", "cse23031@iiitkalyani.ac.in"),
            ContactEntry::new("Kalyani Hemanth", "General Secretary - Culture", "cse23056@iiitkalyani.ac.in"),
            ContactEntry::new("Nikhil Tiwari", "General Secretary - Sports", "ece23126@iiitkalyani.ac.in"),
            ContactEntry::new("Aman Kumar", "Secretary - Codecubus", "cse23012@iiitkalyani.ac.in"),
            ContactEntry::new("Rishabh Kartik", "Secretary - Pixel", "cse23077@iiitkalyani.ac.in"),
            ContactEntry::new("Anshu Kumar", "Secretary - Robotics", "cse23109@iiitkalyani.ac.in"),
        ],
    }
}
