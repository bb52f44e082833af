use super::{Level, LevelId};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn levels() -> Vec<Level> {
    vec![
        Level {
            id: LevelId(1),
            title: "Level 1 — Ad-hoc Assistance".to_string(),
            short_title: "Ad-hoc Assistance".to_string(),
            task_profile: strings(&[
                "Infrequent, one-off tasks",
                "Low context, low risk",
                "No persistence or automation",
            ]),
            examples: strings(&[
                "Drafting an email",
                "Explaining a concept",
                "Summarizing text",
                "Rewriting content",
            ]),
            ai_tools: strings(&["General-purpose chat interfaces (e.g., ChatGPT-class tools)"]),
            engineering_involvement: strings(&["None"]),
            key_characteristics: strings(&[
                "Stateless",
                "Human-in-the-loop by default",
                "Output is disposable",
            ]),
            color: "#3b82f6".to_string(),
        },
        Level {
            id: LevelId(2),
            title: "Level 2 — Structured Personal Productivity".to_string(),
            short_title: "Structured Productivity".to_string(),
            task_profile: strings(&[
                "Repeated tasks with clear structure",
                "Deterministic inputs and outputs",
                "Medium value, low operational risk",
            ]),
            examples: strings(&[
                "CSV analysis (ROI, NPV, sales forecasts)",
                "Financial modeling",
                "Data transformation and reporting",
            ]),
            ai_tools: strings(&[
                "LLMs with skills / tools",
                "File reading",
                "Python execution",
                "Domain-specific markdown or prompt templates",
            ]),
            engineering_involvement: strings(&[
                "Optional",
                "Short validation or debugging sessions",
                "Script review and correctness checks",
            ]),
            key_characteristics: strings(&[
                "Semi-repeatable",
                "User-triggered",
                "No external system dependencies",
            ]),
            color: "#0ea5e9".to_string(),
        },
        Level {
            id: LevelId(3),
            title: "Level 3 — Automated Single-Agent Tasks".to_string(),
            short_title: "Automated Single-Agent".to_string(),
            task_profile: strings(&[
                "Regular, repeatable tasks",
                "Triggered by time or external events",
                "Requires reliability and persistence",
            ]),
            examples: strings(&[
                "Email inbox triage every 5 minutes",
                "Daily report generation",
                "CRM tagging or enrichment",
                "Scheduled data pulls",
            ]),
            ai_tools: strings(&[
                "AI agents with Schedulers",
                "External triggers (email, webhooks, APIs)",
                "Tool access",
            ]),
            engineering_involvement: strings(&[
                "Required for Agent design",
                "Deployment",
                "Runtime stability",
            ]),
            key_characteristics: strings(&[
                "Long-running (24/7)",
                "Stateful",
                "Can be built with no-code/low-code by experienced users",
                "Failure has operational cost",
            ]),
            color: "#10b981".to_string(),
        },
        Level {
            id: LevelId(4),
            title: "Level 4 — Multi-Step Workflow with Human-in-the-Loop".to_string(),
            short_title: "Multi-Step Workflow".to_string(),
            task_profile: strings(&[
                "Multiple dependent steps",
                "Integration with several platforms",
                "Business or reputational risk",
                "Requires approvals and auditability",
            ]),
            examples: strings(&[
                "Content approval pipelines",
                "Invoice reconciliation with review",
                "Customer onboarding flows",
                "Internal process automation with reporting",
            ]),
            ai_tools: strings(&[
                "Workflow orchestration engines",
                "AI agents + deterministic workflows",
                "UI for review, approval, and overrides",
            ]),
            engineering_involvement: strings(&[
                "Mandatory",
                "Backend + frontend",
                "Integration engineering",
                "Error handling and observability",
            ]),
            key_characteristics: strings(&[
                "Human judgment embedded at critical points",
                "Partial autonomy",
                "Designed for real business use",
            ]),
            color: "#f59e0b".to_string(),
        },
        Level {
            id: LevelId(5),
            title: "Level 5 — Production-Grade Agentic Systems".to_string(),
            short_title: "Production Agentic Systems".to_string(),
            task_profile: strings(&[
                "Mission-critical workflows",
                "High volume or high value",
                "Strong correctness and compliance requirements",
            ]),
            examples: strings(&[
                "Financial operations automation",
                "Compliance-sensitive document processing",
                "AI-assisted decision support systems",
                "Customer-facing AI products",
            ]),
            ai_tools: strings(&[
                "Agentic architectures with Durable execution",
                "Retries and compensation logic",
                "Versioned prompts and models",
                "Role-based access",
            ]),
            engineering_involvement: strings(&[
                "Senior engineering required",
                "Architecture, DevOps, security",
                "Monitoring, alerting, and SLAs",
            ]),
            key_characteristics: strings(&[
                "Designed as software products",
                "Failure is expensive",
                "Humans supervise, not operate",
            ]),
            color: "#f97316".to_string(),
        },
        Level {
            id: LevelId(6),
            title: "Level 6 — AI-Native Platforms & Infrastructure".to_string(),
            short_title: "AI-Native Platforms".to_string(),
            task_profile: strings(&[
                "Organization-wide capability",
                "Multiple teams and use cases",
                "Long-term evolution",
            ]),
            examples: strings(&[
                "Internal AI platforms",
                "Company-wide agent frameworks",
                "Vertical SaaS with embedded AI",
                "Custom AI operating layers",
            ]),
            ai_tools: strings(&[
                "Composable agent frameworks",
                "Custom UIs and APIs",
                "Data pipelines, vector stores, model gateways",
            ]),
            engineering_involvement: strings(&[
                "Cross-functional teams",
                "Platform, product, and infrastructure engineers",
            ]),
            key_characteristics: strings(&[
                "AI as a core capability, not a feature",
                "Strong governance and observability",
                "Continuous improvement cycle",
            ]),
            color: "#ef4444".to_string(),
        },
    ]
}
