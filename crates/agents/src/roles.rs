//! The four role variants, declared as profiles.
//!
//! Each variant is fully described by its tuple of name, role label, tool
//! list, temperature, and role description. Tool lists overlap on purpose:
//! matching is used by three of the four variants.

use std::sync::Arc;

use hireflow_common::Result;

use crate::agent::{Agent, RoleProfile};
use crate::executor::Executor;
use crate::tool::{names, Toolbox};

pub const SCREENER: RoleProfile = RoleProfile {
    name: "Screener",
    role: "Resume Analysis & Candidate Triage",
    description: "analyzing resumes, evaluating candidate qualifications, and performing \
initial screening.\n\
You should focus on:\n\
1. Extracting and validating candidate information\n\
2. Matching skills and experience to job requirements\n\
3. Identifying potential red flags\n\
4. Providing initial candidate ranking\n\
5. Generating screening questions",
    temperature: 0.3,
    tool_names: &[names::RESUME_PARSER, names::MATCHING],
};

pub const INTERVIEWER: RoleProfile = RoleProfile {
    name: "Interviewer",
    role: "Conducting Dynamic Interviews",
    description: "conducting interviews and evaluating candidate responses.\n\
You should focus on:\n\
1. Asking relevant and probing questions\n\
2. Adapting questions based on responses\n\
3. Evaluating technical and soft skills\n\
4. Assessing cultural fit\n\
5. Providing detailed feedback",
    temperature: 0.7,
    tool_names: &[names::INTERVIEW, names::MATCHING],
};

pub const MATCHER: RoleProfile = RoleProfile {
    name: "Matcher",
    role: "Culture & Skill Fit Analysis",
    description: "analyzing candidate fit for roles and teams.\n\
You should focus on:\n\
1. Evaluating cultural alignment\n\
2. Assessing team compatibility\n\
3. Analyzing skill gaps\n\
4. Predicting performance\n\
5. Providing matching recommendations",
    temperature: 0.5,
    tool_names: &[names::MATCHING, names::COORDINATION],
};

pub const COORDINATOR: RoleProfile = RoleProfile {
    name: "Coordinator",
    role: "Workflow Orchestration",
    description: "managing the hiring workflow and coordinating between agents.\n\
You should focus on:\n\
1. Orchestrating the hiring process\n\
2. Managing candidate pipeline\n\
3. Coordinating between agents\n\
4. Ensuring process compliance\n\
5. Providing process insights",
    temperature: 0.5,
    tool_names: &[names::COORDINATION, names::INTERVIEW, names::MATCHING],
};

/// All role variants, for callers that build the whole crew.
pub const ROLE_PROFILES: &[RoleProfile] = &[SCREENER, INTERVIEWER, MATCHER, COORDINATOR];

pub fn screener(toolbox: &Toolbox, executor: Arc<dyn Executor>) -> Result<Agent> {
    Agent::from_profile(&SCREENER, toolbox, executor)
}

pub fn interviewer(toolbox: &Toolbox, executor: Arc<dyn Executor>) -> Result<Agent> {
    Agent::from_profile(&INTERVIEWER, toolbox, executor)
}

pub fn matcher(toolbox: &Toolbox, executor: Arc<dyn Executor>) -> Result<Agent> {
    Agent::from_profile(&MATCHER, toolbox, executor)
}

pub fn coordinator(toolbox: &Toolbox, executor: Arc<dyn Executor>) -> Result<Agent> {
    Agent::from_profile(&COORDINATOR, toolbox, executor)
}
