//! Command session - a family tree plus the registry that drives it.

use crate::command::{is_ignorable, parse_command, Command};
use crate::error::CommandFailure;
use crate::output::Formatter;
use kinship_domain::{AddOperation, FamilyTree, Gender, KinshipError, MemberId, RelationRegistry};

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Members resolved by a query, in relation order
    Members(Vec<MemberId>),

    /// A relation was added
    Added {
        /// Success message of the operation
        message: &'static str,
        /// The member that was linked
        member: MemberId,
    },
}

/// Executes commands against one family tree.
pub struct Session {
    tree: FamilyTree,
    registry: RelationRegistry,
}

impl Session {
    /// Create a session over an already seeded tree.
    pub fn new(tree: FamilyTree) -> Self {
        Self {
            tree,
            registry: RelationRegistry::new(),
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    /// The relation registry.
    pub fn registry(&self) -> &RelationRegistry {
        &self.registry
    }

    /// Parse and execute a single command line.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, CommandFailure> {
        let command = parse_command(line)?;
        self.execute(&command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, CommandFailure> {
        match command {
            Command::Query { member, relation } => {
                self.query(member, relation).map(Outcome::Members).map_err(Into::into)
            }
            Command::Add {
                operation,
                relation_member,
                new_member,
                gender,
                via_member,
            } => {
                let op = self.registry.resolve_add(operation)?;
                self.add(&op, relation_member, new_member, *gender, via_member.as_deref())
                    .map(|member| Outcome::Added {
                        message: op.success_message,
                        member,
                    })
                    .map_err(|e| match e {
                        KinshipError::InvalidRelation(_) | KinshipError::InvalidInput(_) => {
                            CommandFailure::with_code(op.failure_code, e)
                        }
                        other => CommandFailure::new(other),
                    })
            }
        }
    }

    /// Resolve a relation of a member.
    pub fn query(&self, member: &str, relation: &str) -> kinship_domain::Result<Vec<MemberId>> {
        let relation = self.registry.resolve_query(relation)?;
        self.tree
            .build_relation(member, relation.kind)?
            .members(&self.tree, relation.gender)
    }

    fn add(
        &mut self,
        op: &AddOperation,
        relation_member: &str,
        new_member: &str,
        gender: Option<Gender>,
        via_member: Option<&str>,
    ) -> kinship_domain::Result<MemberId> {
        let relation = self.tree.build_relation(relation_member, op.kind)?;
        let via = via_member.map(|name| self.tree.member_id(name)).transpose()?;

        let pivot_gender = self.tree.member(relation.pivot()).gender();
        let implied = op.implied_gender.resolve(pivot_gender);
        if let (Some(explicit), Some(implied)) = (gender, implied) {
            if explicit != implied {
                return Err(KinshipError::InvalidInput(format!(
                    "{} must be {} for {}",
                    new_member, implied, op.kind
                )));
            }
        }

        if self.tree.contains(new_member) {
            let member = self.tree.member_id(new_member)?;
            relation.make_relation(&mut self.tree, member, via)?;
            return Ok(member);
        }

        let gender = gender.or(implied).ok_or_else(|| {
            KinshipError::InvalidInput(format!("gender is required to add {}", new_member))
        })?;
        relation.add_new(&mut self.tree, new_member, gender, via)
    }

    /// Execute every command in `input`, one output line per command.
    ///
    /// Blank and comment lines are skipped. A failing command reports its
    /// code and the batch carries on.
    pub fn run_batch(&mut self, input: &str, formatter: &Formatter) -> Vec<String> {
        let mut lines = Vec::new();

        for line in input.lines().filter(|line| !is_ignorable(line)) {
            let rendered = match self.execute_line(line) {
                Ok(outcome) => formatter.outcome(&self.tree, &outcome),
                Err(failure) => {
                    tracing::info!(command = line, error = %failure.source, "Command failed");
                    formatter.failure(&failure)
                }
            };
            lines.push(rendered);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_tree;

    fn session() -> Session {
        Session::new(seed_tree("Anna:female-Abe:male\n    Bela:female\n    Che:male\n").unwrap())
    }

    fn names(session: &Session, outcome: Outcome) -> Vec<String> {
        match outcome {
            Outcome::Members(ids) => ids
                .into_iter()
                .map(|id| session.tree().name_of(id).to_string())
                .collect(),
            other => panic!("Expected members, got {:?}", other),
        }
    }

    #[test]
    fn test_query_line() {
        let mut session = session();
        let outcome = session.execute_line("get_relationship Bela brother").unwrap();
        assert_eq!(names(&session, outcome), vec!["Che"]);
    }

    #[test]
    fn test_add_spouse_with_implied_gender() {
        let mut session = session();
        let outcome = session.execute_line("add_spouse Che Dora").unwrap();
        assert!(matches!(
            outcome,
            Outcome::Added {
                message: "SPOUSE_ADDITION_SUCCEEDED",
                ..
            }
        ));
        let outcome = session.execute_line("spouse_query Che spouse").unwrap();
        assert_eq!(names(&session, outcome), vec!["Dora"]);
    }

    #[test]
    fn test_add_child_without_gender_fails_with_operation_code() {
        let mut session = session();
        let failure = session.execute_line("add_child Anna Dan").unwrap_err();
        assert_eq!(failure.code, "CHILD_ADDITION_FAILED");
        assert!(!session.tree().contains("Dan"));
    }

    #[test]
    fn test_add_child_through_father_fails() {
        let mut session = session();
        let failure = session.execute_line("add_child Abe Dan male").unwrap_err();
        assert_eq!(failure.code, "CHILD_ADDITION_FAILED");
    }

    #[test]
    fn test_add_to_unknown_member_is_not_found() {
        let mut session = session();
        let failure = session.execute_line("add_child Zed Dan male").unwrap_err();
        assert_eq!(failure.code, "PERSON_NOT_FOUND");
    }

    #[test]
    fn test_contradicting_gender_rejected() {
        let mut session = session();
        let failure = session.execute_line("add_father Bela Max female").unwrap_err();
        assert_eq!(failure.code, "FATHER_ADDITION_FAILED");
    }

    #[test]
    fn test_unknown_tokens_are_configuration_errors() {
        let mut session = session();
        assert_eq!(
            session.execute_line("get_relationship Bela cousin").unwrap_err().code,
            "CONFIGURATION_ERROR"
        );
        assert_eq!(
            session.execute_line("add_cousin Bela Max male").unwrap_err().code,
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_existing_member_is_linked() {
        let mut session = session();
        session.execute_line("add_child Anna Dora female").unwrap();
        let failure = session.execute_line("add_spouse Bela Dora").unwrap_err();
        assert_eq!(failure.code, "SPOUSE_ADDITION_FAILED");

        let mut tree = FamilyTree::new();
        tree.add_member("Eve", Gender::Female).unwrap();
        tree.add_member("Fin", Gender::Male).unwrap();
        let mut session = Session::new(tree);
        session.execute_line("add_spouse Eve Fin").unwrap();
        let outcome = session.execute_line("get_relationship Fin spouse").unwrap();
        assert_eq!(names(&session, outcome), vec!["Eve"]);
    }
}
