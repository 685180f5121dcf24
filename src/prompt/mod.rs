//! Prompt construction for each generated feature.
//!
//! Every builder formats a natural-language instruction plus a bounded
//! prefix of the source text into a [`GenerateRequest`]. Excerpt bounds are
//! per feature and counted in characters; structured features ask for JSON
//! output and go through the repair chain on the way back.

use crate::provider::GenerateRequest;
use crate::types::{Language, ReviewStyle};
use crate::util::text::excerpt;

/// Per-feature excerpt bounds, in characters.
pub mod limits {
    pub const SUMMARY: usize = 30_000;
    pub const GOLDEN_SENTENCES: usize = 15_000;
    pub const EXERCISES: usize = 10_000;
    pub const QA: usize = 10_000;
    pub const VOCABULARY: usize = 5_000;
    pub const ACTION_PLAN: usize = 10_000;
    pub const BEGINNER_GUIDE: usize = 10_000;
    pub const REVIEW: usize = 10_000;
    pub const PODCAST: usize = 10_000;
    pub const BILINGUAL: usize = 4_000;
}

fn json_request(instruction: &str, text: &str, limit: usize) -> GenerateRequest {
    GenerateRequest::builder()
        .prompt(format!("{instruction} Text: {}", excerpt(text, limit)))
        .json(true)
        .build()
}

fn markdown_request(instruction: &str, text: &str, limit: usize) -> GenerateRequest {
    GenerateRequest::builder()
        .prompt(format!(
            "{instruction} Use Markdown format. Text: {}",
            excerpt(text, limit)
        ))
        .build()
}

/// Sectioned deep summary (3-5 titled parts).
pub fn summary(text: &str, lang: Language) -> GenerateRequest {
    let instruction = match lang {
        Language::Zh => {
            "对以下文本进行深度拆解摘要。请按逻辑或章节将其分为 3-5 个关键部分。\
             不要返回纯文本，必须返回JSON数组：\
             [{ \"title\": \"部分标题\", \"content\": \"详细的摘要内容\" }]"
        }
        Language::En => {
            "Deeply summarize the following text. Break it down into 3-5 logical sections. \
             Do not return plain text, strictly return a JSON array: \
             [{ \"title\": \"Section Title\", \"content\": \"Detailed summary content\" }]"
        }
    };
    json_request(instruction, text, limits::SUMMARY)
}

/// Paragraph-by-paragraph translation of (a chunk of) the source.
pub fn bilingual(text: &str) -> GenerateRequest {
    let instruction = "Translate the text paragraph by paragraph into Chinese. \
         Strictly output a JSON array of objects: \
         [{ \"original\": \"Original text paragraph\", \"translation\": \"Chinese translation\" }]. \
         Ensure the translation is accurate and elegant. \
         Do not summarize, translate fully.";
    json_request(instruction, text, limits::BILINGUAL)
}

/// Five quotable "golden sentences" with translations.
pub fn golden_sentences(text: &str) -> GenerateRequest {
    let instruction = "Extract 5 profound, artistic, or philosophically significant \
         \"Golden Sentences\" from the text. Avoid simple or functional sentences. \
         Important: If the text is in Chinese, convert Traditional Chinese to Simplified \
         Chinese for both the extraction and translation fields. \
         Return JSON array: [{ \"sentence\": \"...\", \"translation\": \
         \"Meaning or translation (Simplified Chinese)...\", \"id\": \"1\" }].";
    json_request(instruction, text, limits::GOLDEN_SENTENCES)
}

/// Five multiple-choice questions.
pub fn exercises(text: &str, lang: Language) -> GenerateRequest {
    let lead = match lang {
        Language::Zh => "根据文本生成5道选择题。返回 JSON 数组。",
        Language::En => "Generate 5 multiple choice questions based on the text. JSON Array.",
    };
    let instruction = format!(
        "{lead} Return format: [{{ \"question\": \"...\", \
         \"options\": [\"A. x\", \"B. y\", \"C. z\", \"D. w\"], \"correctLetter\": \"A\", \
         \"answer\": \"Content of correct answer\", \"explanation\": \"Detailed explanation\" }}]."
    );
    json_request(&instruction, text, limits::EXERCISES)
}

/// Five deep Q&A pairs.
pub fn qa(text: &str, lang: Language) -> GenerateRequest {
    let lead = match lang {
        Language::Zh => {
            "根据文本生成5个深度问答。要求：1. 问题必须精简，严格控制在30字以内。\
             2. 答案言简意赅，严格控制在200字以内。"
        }
        Language::En => {
            "Generate 5 Q&A pairs. Questions < 30 chars. Answers < 200 chars. \
             Focus on 'Why' and 'How'."
        }
    };
    let instruction =
        format!("{lead} Return JSON: [{{ \"question\": \"...\", \"answer\": \"Detailed answer...\" }}].");
    json_request(&instruction, text, limits::QA)
}

/// Ten advanced or domain-specific vocabulary entries.
pub fn vocabulary(text: &str) -> GenerateRequest {
    let instruction = "Extract 10 advanced, rare, or domain-specific words from the text. \
         EXCLUDE common words (CEFR A1-B2 level). Focus on C1/C2 words or specialized \
         terminology. Return JSON: [{ \"word\": \"...\", \"ipa\": \"...\", \"pos\": \"...\", \
         \"meaning\": \"Chinese meaning\" }].";
    json_request(instruction, text, limits::VOCABULARY)
}

/// Seven-day action plan derived from the text's principles.
pub fn action_plan(text: &str, lang: Language) -> GenerateRequest {
    let instruction = match lang {
        Language::Zh => {
            "根据文中的原则制定一个切实可行的7天行动计划。\
             直接列出计划（Day 1...），不要写任何前言、总结或多余的废话。"
        }
        Language::En => {
            "Create a practical 7-day action plan based on the principles in this text. \
             Go STRAIGHT to Day 1. No intro, no summary, no fluff."
        }
    };
    markdown_request(instruction, text, limits::ACTION_PLAN)
}

/// Explain-like-I'm-five walkthrough of the core ideas.
pub fn beginner_guide(text: &str, lang: Language) -> GenerateRequest {
    let instruction = match lang {
        Language::Zh => {
            "请用最通俗易懂的语言，像给新手或5岁孩子讲故事一样，\
             拆解这篇文章的核心概念和逻辑。使用简单的比喻，避免专业术语。"
        }
        Language::En => {
            "Explain the core concepts and logic of this text in the simplest terms possible, \
             like telling a story to a beginner or a 5-year-old. Use simple analogies and \
             avoid jargon."
        }
    };
    markdown_request(instruction, text, limits::BEGINNER_GUIDE)
}

/// Book review in a selectable style, under 800 words.
pub fn review(text: &str, style: ReviewStyle, lang: Language) -> GenerateRequest {
    let instruction = match lang {
        Language::Zh => format!(
            "写一篇排版优美的深度书评（严格控制在800字以内），风格模仿：{}。",
            style.prompt_name()
        ),
        Language::En => format!(
            "Write a beautiful book review (Strictly UNDER 800 words) in the style of {}.",
            style.prompt_name()
        ),
    };
    markdown_request(&instruction, text, limits::REVIEW)
}

/// Two-speaker podcast dialogue summarizing the text.
pub fn podcast_script(text: &str, lang: Language) -> GenerateRequest {
    let lead = match lang {
        Language::Zh => "生成一段幽默、有抱负的播客对话（主持人与嘉宾），总结这段文本。",
        Language::En => {
            "Generate a humorous, ambitious podcast dialogue between a Host and a Guest \
             summarizing this text."
        }
    };
    let instruction =
        format!("{lead} Return JSON: [{{ \"speaker\": \"Host\" | \"Guest\", \"text\": \"...\" }}].");
    json_request(&instruction, text, limits::PODCAST)
}
