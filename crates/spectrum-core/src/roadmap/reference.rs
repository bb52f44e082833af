use super::{ActionCategory, ActionItem, GapAnalysis, LevelTransition};
use crate::catalog::LevelId;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn action(title: &str, description: &str, category: ActionCategory) -> ActionItem {
    ActionItem {
        title: title.to_string(),
        description: description.to_string(),
        category,
    }
}

pub(super) fn transitions() -> Vec<LevelTransition> {
    use ActionCategory::{Organizational, Process, Technical};

    vec![
        LevelTransition {
            from_level: LevelId(1),
            to_level: LevelId(2),
            gap_analysis: GapAnalysis {
                task_evolution: "Move from one-off prompts to repeatable, structured workflows with consistent inputs and outputs"
                    .to_string(),
                risk_increase: "Outputs now feed into business processes, requiring validation and quality checks"
                    .to_string(),
                scope_expansion: "From personal productivity hacks to team-level patterns that can be documented and shared"
                    .to_string(),
            },
            action_items: vec![
                action(
                    "Document your top 5 AI tasks",
                    "Identify the prompts you use most often and write them down as reusable templates",
                    Process,
                ),
                action(
                    "Add structure to your inputs",
                    "Create a standard format for data you feed to AI (CSV templates, JSON schemas, markdown outlines)",
                    Technical,
                ),
                action(
                    "Enable code execution",
                    "Use tools with Python/code interpreter capabilities for data analysis and transformations",
                    Technical,
                ),
                action(
                    "Establish output validation",
                    "Define what 'good output' looks like and create a checklist to verify AI results",
                    Process,
                ),
            ],
            skills_needed: strings(&[
                "Prompt engineering fundamentals",
                "Data formatting (CSV, JSON)",
                "Basic scripting literacy",
                "Template design",
            ]),
            tools_to_implement: strings(&[
                "LLM with file upload capability",
                "Code interpreter (Python execution)",
                "Prompt template library",
                "Output validation checklist",
            ]),
            key_milestones: strings(&[
                "First reusable prompt template",
                "Consistent output format achieved",
                "Team member successfully uses your template",
            ]),
        },
        LevelTransition {
            from_level: LevelId(2),
            to_level: LevelId(3),
            gap_analysis: GapAnalysis {
                task_evolution: "Shift from manual triggering to automated, scheduled execution that runs without human initiation"
                    .to_string(),
                risk_increase: "Failure now has operational cost - missed automations impact business processes"
                    .to_string(),
                scope_expansion: "From individual productivity to always-on business operations that run 24/7"
                    .to_string(),
            },
            action_items: vec![
                action(
                    "Identify one daily repetitive task",
                    "Find a task you do every day at the same time that could run automatically",
                    Process,
                ),
                action(
                    "Set up a scheduling system",
                    "Implement cron jobs, cloud schedulers, or automation platform triggers",
                    Technical,
                ),
                action(
                    "Add state persistence",
                    "Store results and context between runs so the agent remembers previous work",
                    Technical,
                ),
                action(
                    "Define ownership and monitoring",
                    "Assign someone responsible for the automation and set up failure alerts",
                    Organizational,
                ),
                action(
                    "Create a runbook",
                    "Document what the automation does, how to check it's working, and how to fix common issues",
                    Process,
                ),
            ],
            skills_needed: strings(&[
                "Agent design principles",
                "Scheduling and triggers",
                "Basic DevOps concepts",
                "Error handling patterns",
                "State management",
            ]),
            tools_to_implement: strings(&[
                "AI agent framework",
                "Scheduler (cron, cloud scheduler)",
                "Webhook/API triggers",
                "Database or file storage for state",
                "Alerting system",
            ]),
            key_milestones: strings(&[
                "First automation runs unattended for 1 week",
                "Successful recovery from first failure",
                "Zero manual interventions for 30 days",
            ]),
        },
        LevelTransition {
            from_level: LevelId(3),
            to_level: LevelId(4),
            gap_analysis: GapAnalysis {
                task_evolution: "Expand from single-agent tasks to multi-step workflows with human checkpoints and approvals"
                    .to_string(),
                risk_increase: "Business and reputational risk requires human judgment at critical decision points"
                    .to_string(),
                scope_expansion: "From isolated automations to integrated workflows spanning multiple systems and stakeholders"
                    .to_string(),
            },
            action_items: vec![
                action(
                    "Map your end-to-end process",
                    "Document all steps from trigger to completion, identifying where humans need to review or approve",
                    Process,
                ),
                action(
                    "Design approval interfaces",
                    "Build simple UIs or use existing tools (Slack, email) for human review and override",
                    Technical,
                ),
                action(
                    "Implement workflow orchestration",
                    "Use a workflow engine to manage step dependencies, retries, and state transitions",
                    Technical,
                ),
                action(
                    "Add audit logging",
                    "Record all decisions (human and AI) with timestamps for compliance and debugging",
                    Technical,
                ),
                action(
                    "Establish escalation paths",
                    "Define what happens when AI is uncertain or human doesn't respond in time",
                    Organizational,
                ),
            ],
            skills_needed: strings(&[
                "Workflow design patterns",
                "Integration engineering",
                "UI/UX for approval flows",
                "Error handling and compensation",
                "Compliance and audit requirements",
            ]),
            tools_to_implement: strings(&[
                "Workflow orchestration engine",
                "Human-in-the-loop UI",
                "Integration connectors (APIs, webhooks)",
                "Audit logging system",
                "Notification/escalation system",
            ]),
            key_milestones: strings(&[
                "First workflow with human approval gate",
                "Successful audit of automated decisions",
                "Stakeholder trust in AI recommendations",
            ]),
        },
        LevelTransition {
            from_level: LevelId(4),
            to_level: LevelId(5),
            gap_analysis: GapAnalysis {
                task_evolution: "Transition from human-supervised workflows to production-grade systems with enterprise reliability"
                    .to_string(),
                risk_increase: "Mission-critical operations where failure is expensive - requires SLAs and disaster recovery"
                    .to_string(),
                scope_expansion: "From internal tools to customer-facing products and compliance-sensitive operations"
                    .to_string(),
            },
            action_items: vec![
                action(
                    "Implement durable execution",
                    "Use frameworks that survive crashes, resume from checkpoints, and handle long-running operations",
                    Technical,
                ),
                action(
                    "Version your prompts and models",
                    "Treat prompts as code - version control, testing, staged rollouts",
                    Technical,
                ),
                action(
                    "Build comprehensive observability",
                    "Add metrics, tracing, and logging to understand system behavior and debug issues",
                    Technical,
                ),
                action(
                    "Establish SLAs and on-call",
                    "Define uptime targets, response times, and who gets paged when things break",
                    Organizational,
                ),
                action(
                    "Implement security controls",
                    "Add role-based access, secrets management, and data protection measures",
                    Technical,
                ),
            ],
            skills_needed: strings(&[
                "Production systems architecture",
                "DevOps and SRE practices",
                "Security engineering",
                "Performance optimization",
                "Incident management",
            ]),
            tools_to_implement: strings(&[
                "Durable execution framework",
                "Prompt versioning system",
                "Observability stack (metrics, logs, traces)",
                "Incident management platform",
                "Secrets and access management",
            ]),
            key_milestones: strings(&[
                "First 99.9% uptime month",
                "Successful production incident recovery",
                "Passing security audit",
            ]),
        },
        LevelTransition {
            from_level: LevelId(5),
            to_level: LevelId(6),
            gap_analysis: GapAnalysis {
                task_evolution: "Evolve from individual agentic systems to organization-wide AI capability and infrastructure"
                    .to_string(),
                risk_increase: "Strategic risk - AI becomes core to competitive advantage and requires long-term investment"
                    .to_string(),
                scope_expansion: "From point solutions to platforms that enable multiple teams and use cases across the organization"
                    .to_string(),
            },
            action_items: vec![
                action(
                    "Build a composable agent framework",
                    "Create reusable components that teams can assemble into custom AI solutions",
                    Technical,
                ),
                action(
                    "Establish AI governance",
                    "Define policies for AI usage, model selection, data handling, and ethical guidelines",
                    Organizational,
                ),
                action(
                    "Create self-service platforms",
                    "Enable non-engineering teams to build and deploy AI workflows without deep technical knowledge",
                    Technical,
                ),
                action(
                    "Implement continuous improvement",
                    "Build feedback loops, A/B testing, and model performance monitoring into the platform",
                    Process,
                ),
                action(
                    "Build cross-functional AI team",
                    "Assemble platform, product, and infrastructure engineers dedicated to AI capabilities",
                    Organizational,
                ),
            ],
            skills_needed: strings(&[
                "Platform engineering",
                "API and SDK design",
                "Data pipeline architecture",
                "ML operations (MLOps)",
                "Organizational change management",
            ]),
            tools_to_implement: strings(&[
                "Agent framework with plugin architecture",
                "Model gateway and routing",
                "Vector stores and knowledge bases",
                "Self-service workflow builder",
                "AI governance dashboard",
            ]),
            key_milestones: strings(&[
                "Multiple teams building on your platform",
                "Non-engineers deploying AI workflows",
                "AI as recognized core competency",
            ]),
        },
    ]
}
