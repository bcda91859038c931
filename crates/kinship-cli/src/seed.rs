//! Seed loader for indentation-based family files.
//!
//! Each non-comment line describes one member, optionally with a spouse:
//!
//! ```text
//! Anga:female-Shan:male
//!     Chit:male-Amba:female
//!         Dritha:female
//! ```
//!
//! Indentation depth (four columns per level) says which generation a line
//! belongs to; the member is added as a child of the most recent mother one
//! level up.

use kinship_domain::{FamilyTree, Gender, KinshipError, RelationKind, Result};

/// Family compiled into the binary, used when no seed file is configured.
pub const DEFAULT_SEED: &str = include_str!("../data/shan-family.txt");

const INDENT_WIDTH: usize = 4;

/// A person named on a seed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPerson {
    /// Member name
    pub name: String,
    /// Member gender
    pub gender: Gender,
}

/// One parsed seed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRecord {
    /// 1-based line number in the source text
    pub line: usize,
    /// Generation depth, 0 for the top level
    pub depth: usize,
    /// The blood member described by the line
    pub member: SeedPerson,
    /// Spouse, if the line names one
    pub spouse: Option<SeedPerson>,
}

impl SeedRecord {
    /// The woman on this line, who becomes the mother for the next depth.
    fn mother_name(&self) -> Option<&str> {
        if self.member.gender == Gender::Female {
            return Some(&self.member.name);
        }
        self.spouse
            .as_ref()
            .filter(|spouse| spouse.gender == Gender::Female)
            .map(|spouse| spouse.name.as_str())
    }
}

/// Parse seed text into records.
///
/// Blank lines and lines containing `//` are skipped.
pub fn parse_seed(text: &str) -> Result<Vec<SeedRecord>> {
    let mut records = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() || raw.contains("//") {
            continue;
        }

        let content = raw.trim_start();
        let indent: usize = raw[..raw.len() - content.len()]
            .chars()
            .map(|c| if c == '\t' { INDENT_WIDTH } else { 1 })
            .sum();

        let content = content.trim_end();
        let (member, spouse) = match content.split_once('-') {
            Some((member, spouse)) => (member, Some(spouse)),
            None => (content, None),
        };

        records.push(SeedRecord {
            line,
            depth: indent / INDENT_WIDTH,
            member: parse_person(member, line)?,
            spouse: spouse.map(|s| parse_person(s, line)).transpose()?,
        });
    }

    Ok(records)
}

fn parse_person(text: &str, line: usize) -> Result<SeedPerson> {
    let (name, gender) = text.trim().rsplit_once(':').ok_or_else(|| {
        KinshipError::InvalidInput(format!("line {}: expected Name:gender, got '{}'", line, text))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(KinshipError::InvalidInput(format!("line {}: missing name", line)));
    }

    let gender = gender
        .parse::<Gender>()
        .map_err(|e| KinshipError::InvalidInput(format!("line {}: {}", line, e)))?;

    Ok(SeedPerson {
        name: name.to_string(),
        gender,
    })
}

/// Apply parsed records to a tree.
///
/// The first top-level woman becomes the root.
pub fn load_seed(tree: &mut FamilyTree, records: &[SeedRecord]) -> Result<()> {
    let mut mothers: Vec<Option<String>> = Vec::new();

    for record in records {
        let member = tree.add_member(&record.member.name, record.member.gender)?;

        if let Some(spouse) = &record.spouse {
            let spouse_id = tree.add_member(&spouse.name, spouse.gender)?;
            let marriage = tree.build_relation(&record.member.name, RelationKind::Spouse)?;
            marriage
                .make_relation(tree, spouse_id, None)
                .map_err(|e| at_line(record.line, e))?;
        }

        if record.depth > 0 {
            let mother = mothers
                .get(record.depth - 1)
                .cloned()
                .flatten()
                .ok_or_else(|| {
                    KinshipError::InvalidInput(format!(
                        "line {}: no mother known for {}",
                        record.line, record.member.name
                    ))
                })?;

            let parentage = tree.build_relation(&mother, RelationKind::Child)?;
            parentage
                .make_relation(tree, member, None)
                .map_err(|e| at_line(record.line, e))?;
        }

        mothers.truncate(record.depth);
        mothers.push(record.mother_name().map(str::to_string));

        if record.depth == 0 && tree.root().is_none() && record.member.gender == Gender::Female {
            tree.set_root(&record.member.name)?;
        }
    }

    tracing::info!(members = tree.len(), "Seed loaded");
    Ok(())
}

/// Parse seed text and build a fresh tree from it.
pub fn seed_tree(text: &str) -> Result<FamilyTree> {
    let records = parse_seed(text)?;
    let mut tree = FamilyTree::new();
    load_seed(&mut tree, &records)?;
    Ok(tree)
}

fn at_line(line: usize, error: KinshipError) -> KinshipError {
    match error {
        KinshipError::InvalidRelation(msg) => {
            KinshipError::InvalidRelation(format!("line {}: {}", line, msg))
        }
        other => other,
    }
}
