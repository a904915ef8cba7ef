// Test fixtures with known documents and expected concordances
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// Two short sentences sharing one word
pub const SIMPLE_TEXT: &str = "The cat sat. The dog ran.";

/// Expected concordance for SIMPLE_TEXT
/// Format: label. word<TAB>{frequency:sentences}
pub const SIMPLE_EXPECTED: &str = "a. cat\t{1:1}
b. dog\t{1:2}
c. ran\t{1:2}
d. sat\t{1:1}
e. the\t{2:1,2}";

/// Multi-line text where one sentence spans a hard line break
pub const MULTILINE_TEXT: &str = "Given an arbitrary text document written in English,\nwrite a program that will generate a concordance. Sentence numbers\r\nstart at 1.\n";

/// Expected concordance for MULTILINE_TEXT
/// WHY: Line breaks inside a sentence must not start a new sentence
pub const MULTILINE_EXPECTED: &str = "a. 1\t{1:2}
b. a\t{2:1,1}
c. an\t{1:1}
d. arbitrary\t{1:1}
e. at\t{1:2}
f. concordance\t{1:1}
g. document\t{1:1}
h. english\t{1:1}
i. generate\t{1:1}
j. given\t{1:1}
k. in\t{1:1}
l. numbers\t{1:2}
m. program\t{1:1}
n. sentence\t{1:2}
o. start\t{1:2}
p. text\t{1:1}
q. that\t{1:1}
r. will\t{1:1}
s. write\t{1:1}
t. written\t{1:1}";

/// Text with punctuation runs, contractions and decimals
pub const PUNCTUATION_TEXT: &str = "Wait -- don't go! It costs 3.50 today... Really?";

/// Expected concordance for PUNCTUATION_TEXT
pub const PUNCTUATION_EXPECTED: &str = "a. 3.50\t{1:2}
b. costs\t{1:2}
c. don't\t{1:1}
d. go\t{1:1}
e. it\t{1:2}
f. really\t{1:3}
g. today\t{1:2}
h. wait\t{1:1}";

/// Build a single-sentence text with `count` distinct zero-padded words
pub fn numbered_words(count: usize) -> String {
    (0..count)
        .map(|i| format!("word{i:02}"))
        .collect::<Vec<_>>()
        .join(" ")
}
