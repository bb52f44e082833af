use super::{AnswerOption, Question};
use crate::catalog::LevelId;

fn question(id: &str, text: &str, options: [&str; 6]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options
            .iter()
            .zip(1u32..)
            .map(|(text, level)| AnswerOption {
                text: text.to_string(),
                level_id: LevelId(level),
            })
            .collect(),
    }
}

pub(super) fn questions() -> Vec<Question> {
    vec![
        question(
            "frequency",
            "How often do you use AI tools in your work?",
            [
                "Occasionally, when I remember or get stuck",
                "Regularly for specific repeated tasks (reports, analysis)",
                "Daily — AI handles routine tasks automatically",
                "Continuously — AI is embedded in our workflows with checkpoints",
                "24/7 — AI systems run autonomously with monitoring",
                "AI is foundational to how our organization operates",
            ],
        ),
        question(
            "engineering",
            "What level of technical setup is involved in your AI usage?",
            [
                "None — I just type prompts in a chat interface",
                "Minimal — I use templates, file uploads, or simple scripts",
                "Some — We have scheduled agents or automations someone built",
                "Significant — Custom integrations with approval workflows",
                "Heavy — Full engineering team for architecture, DevOps, security",
                "Cross-functional — Platform teams, data pipelines, custom infrastructure",
            ],
        ),
        question(
            "oversight",
            "How much human oversight is involved in your AI tasks?",
            [
                "I manually trigger and review everything",
                "I trigger tasks but trust outputs for low-stakes work",
                "Tasks run on schedules, I review if something fails",
                "AI proposes, humans approve at critical decision points",
                "Humans supervise dashboards, AI executes autonomously",
                "Governance frameworks manage AI across the organization",
            ],
        ),
        question(
            "scope",
            "What is the scope of AI adoption in your context?",
            [
                "Just me, for personal productivity",
                "Me and maybe a few colleagues with similar needs",
                "My team has shared automations",
                "Multiple teams use coordinated AI workflows",
                "Department or business-unit wide AI systems",
                "Organization-wide AI platform serving all teams",
            ],
        ),
        question(
            "risk",
            "What happens if your AI tools fail or produce errors?",
            [
                "Minor inconvenience — I redo the task manually",
                "Some rework needed but no business impact",
                "Operational disruption — missed deadlines or backlogs",
                "Business risk — requires escalation and remediation",
                "Significant financial or compliance consequences",
                "Strategic impact — affects core business operations",
            ],
        ),
        question(
            "state",
            "How is context and data handled in your AI usage?",
            [
                "Each conversation starts fresh — no memory",
                "I reuse prompts/templates but no persistent state",
                "AI maintains state across sessions (databases, CRM updates)",
                "Complex state flows through multi-step pipelines",
                "Durable execution with versioning, retries, and audit trails",
                "Centralized data pipelines, vector stores, and model gateways",
            ],
        ),
    ]
}
