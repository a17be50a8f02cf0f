//! Name and attribute pools for synthesized entities

pub const FIRST_NAMES: [&str; 8] = ["Ahmed", "Bilal", "Hamza", "Yusuf", "Ibrahim", "Tariq", "Zaid", "Omar"];

pub const LAST_NAMES: [&str; 8] = ["Khan", "Malik", "Shah", "Bhatti", "Raja", "Aziz", "Mir", "Dar"];

pub const REGIONS: [&str; 6] = ["Muzaffarabad", "Neelum Valley", "Bhimber", "Sialkot", "Lahore", "Karachi"];

pub const FRONT_ORGS: [&str; 4] = ["Al-Khidmat Trust", "Falcon Trading", "Green Crescent", "Kashmir Relief Fund"];

pub const PERSON_ROLES: [&str; 2] = ["Field Operative", "Courier"];

pub const SAFE_HOUSE_LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

pub const CONFIDENCE: [&str; 3] = ["Low", "Medium", "High"];

/// Relationship verbs for expansion edges
pub const VERBS: [&str; 4] = ["CONTACTED", "VISITED", "FUNDED", "LINKED"];
