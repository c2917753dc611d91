//! Supportive chat replies.
//!
//! With a generator the reply is model text grounded in the assessment
//! context; without one (or when generation fails) a scripted reply is
//! chosen by keyword. Crisis language always gets crisis-line guidance
//! first, whichever way the reply was produced.

use serde::Serialize;
use tracing::{debug, warn};

use mindcheck_core::models::assessment::AssessmentResult;
use mindcheck_core::models::chat_history::ChatMessage;

use crate::context::{HistoryLine, build_assessment_context, recent_history};
use crate::error::AssistantError;
use crate::generator::TextGenerator;
use crate::prompts::{THERAPEUTIC_RESPONSE, render_prompt};

/// Phrases that trigger crisis guidance. Matched case-insensitively.
pub const CRISIS_KEYWORDS: [&str; 5] = [
    "suicide",
    "kill myself",
    "hopeless",
    "end my life",
    "self-harm",
];

pub const CRISIS_GUIDANCE: &str = "\
If you are thinking about ending your life or harming yourself, please reach out now: \
call or text 988 (Suicide & Crisis Lifeline), or call 911 if you are in immediate danger. \
You do not have to go through this alone.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub crisis: bool,
    pub scripted: bool,
}

pub fn contains_crisis_language(message: &str) -> bool {
    let lower = message.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[derive(Serialize)]
struct TherapeuticPromptFields<'a> {
    context: String,
    history: Vec<HistoryLine>,
    message: &'a str,
}

pub fn therapeutic_prompt(
    message: &str,
    assessment: &AssessmentResult,
    history: &[ChatMessage],
) -> Result<String, AssistantError> {
    render_prompt(
        "therapeutic_response",
        THERAPEUTIC_RESPONSE,
        &TherapeuticPromptFields {
            context: build_assessment_context(assessment),
            history: recent_history(history),
            message,
        },
    )
}

/// Produce a reply to `message` from a user whose latest assessment is
/// `assessment`. `history` is the session so far, oldest first.
pub fn therapeutic_reply(
    generator: Option<&dyn TextGenerator>,
    message: &str,
    assessment: &AssessmentResult,
    history: &[ChatMessage],
) -> ChatReply {
    let generated = generator.and_then(|g| {
        therapeutic_prompt(message, assessment, history)
            .and_then(|prompt| g.generate(&prompt))
            .inspect_err(|e| warn!(error = %e, "chat generation failed, using scripted reply"))
            .ok()
            .filter(|text| !text.trim().is_empty())
    });

    let scripted = generated.is_none();
    let body = generated.unwrap_or_else(|| scripted_reply(message).to_string());

    let crisis = contains_crisis_language(message);
    if crisis {
        warn!(assessment_id = %assessment.id, "crisis language in chat message");
    }
    debug!(scripted, crisis, reply_len = body.len(), "chat reply ready");

    let text = if crisis {
        format!("{CRISIS_GUIDANCE}\n\n{}", body.trim())
    } else {
        body.trim().to_string()
    };

    ChatReply {
        text,
        crisis,
        scripted,
    }
}

/// The scripted reply for a message, chosen by the first matching topic.
pub fn scripted_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["self care", "self-care"]) {
        if has(&["plan", "5 day", "5-day"]) {
            return SELF_CARE_PLAN;
        }
        return SELF_CARE;
    }
    if has(&["anxiety", "stress"]) {
        return ANXIETY;
    }
    if has(&["depression", "sad", "down"]) {
        return DEPRESSION;
    }
    if has(&["sleep", "insomnia"]) {
        return SLEEP;
    }
    if has(&["panic"]) {
        return PANIC;
    }
    if has(&["lonely", "loneliness", "alone"]) {
        return LONELINESS;
    }
    if has(&["grief", "loss", "death"]) {
        return GRIEF;
    }

    let index = lower.bytes().map(usize::from).sum::<usize>() % SUPPORTIVE.len();
    SUPPORTIVE[index]
}

const SELF_CARE_PLAN: &str = "\
Here is a five-day self-care plan you can adapt to fit your week.

**Day 1 - Body:** a 20-minute walk, plenty of water, a regular bedtime, a few minutes of stretching.
**Day 2 - Feelings:** write down three things you are grateful for, play music you love, message someone you trust.
**Day 3 - Mind:** read something you enjoy, try a small new activity, keep social media short.
**Day 4 - Connection:** reach out to someone you have not talked to lately, or join a group or class.
**Day 5 - Meaning:** spend time outdoors, reflect on what matters to you, plan something to look forward to.

Change anything that does not feel right. The best plan is one you can keep.";

const SELF_CARE: &str = "\
Self-care can be simple. A few places to start:

**Physical:** move a little each day, aim for 7-9 hours of sleep, eat regular meals, take breaks.
**Emotional:** journal, talk with someone you trust, let yourself feel what you feel.
**Mental:** read, learn something new, limit screen time, make something creative.
**Social:** spend time with people you care about, set boundaries, ask for help when you need it.

Would you like help putting together a plan for the week?";

const ANXIETY: &str = "\
Anxiety and stress can be exhausting. Some things that help in the moment:

- **4-7-8 breathing:** breathe in for 4, hold for 7, out for 8.
- **5-4-3-2-1 grounding:** notice 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.
- **Muscle relaxation:** tense and release one muscle group at a time.

Regular exercise, steady sleep, and less caffeine help over time. If anxiety is getting in the way of \
daily life, a mental health professional can help. What has been weighing on you most?";

const DEPRESSION: &str = "\
What you are feeling is real, and you do not have to carry it alone.

- Pick one small task for today and let that be enough.
- Keep a regular time for sleep and meals.
- A short walk or some daylight can lift mood a little.
- Reach out to someone you trust, even with a short message.

Depression is treatable, and talking with a mental health professional is a strong step. \
If you have thoughts of harming yourself, call or text 988 right away.";

const SLEEP: &str = "\
Sleep trouble affects everything else. A few habits that help:

- Go to bed and get up at the same time every day.
- Keep the bedroom cool, dark, and quiet.
- Put screens away an hour before bed and skip caffeine after early afternoon.
- Wind down with slow breathing, a warm shower, or writing down what is on your mind.

If poor sleep goes on for weeks or affects your days, it is worth talking to a professional. \
What do you think is keeping you up?";

const PANIC: &str = "\
Panic attacks are frightening, but they pass and they are treatable.

- Breathe slowly: in for 4, hold for 4, out for 6.
- Ground yourself in what you can see, hear, and touch.
- Remind yourself the peak usually passes within about ten minutes.
- Cold water on your face can help reset your body.

If you ever think it might be a heart problem, or symptoms do not ease, seek emergency care. \
A professional can teach you techniques that make attacks less frequent.";

const LONELINESS: &str = "\
Loneliness is painful, and many people feel it.

- Send a message or make a call to someone, even briefly.
- Look for a class, club, volunteer role, or online group around something you enjoy.
- Small everyday interactions count too.
- Be kind to yourself and keep a daily routine.

If loneliness stays with you despite reaching out, talking with a counselor can help.";

const GRIEF: &str = "\
Grief has no right way and no timeline. Sadness, anger, guilt, and even relief are all normal.

- Let your feelings out by talking, writing, or creating.
- Try to keep eating, sleeping, and moving, even a little.
- Accept help from people around you.
- Find your own ways to remember the person you lost.

If grief is still overwhelming daily life after months, a grief counselor or support group can help.";

const SUPPORTIVE: [&str; 4] = [
    "Thank you for reaching out. Your feelings are valid, and you are not alone. I am here to listen \
and offer general guidance, and a mental health professional can give you more personal support.",
    "It takes courage to talk about how you feel. What you are going through matters. I can listen \
and share ideas, and speaking with a mental health professional could give you more specialized care.",
    "I hear you. It is normal to struggle sometimes, and reaching out is a healthy step. Alongside our \
conversations, consider connecting with a mental health professional for ongoing support.",
    "It is okay not to be okay. I am glad you shared this with me. A mental health professional can \
offer support tailored to you, and asking for help is a sign of strength.",
];
