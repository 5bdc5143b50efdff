use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::errors::{Result, RigError};
use crate::rig::PartKey;
use crate::rig::part::{Part, PartSpec};

/// Immutable part hierarchy of one entity species.
///
/// Built once from a list of [`PartSpec`]s and shared by every instance of
/// the species. Nothing here changes after [`build`](Self::build) returns;
/// per-instance animated transforms live in a separate
/// [`Pose`](crate::rig::Pose).
#[derive(Debug, Clone)]
pub struct PartTreeTemplate {
    name: String,
    parts: SlotMap<PartKey, Part>,
    root: PartKey,
    by_name: FxHashMap<String, PartKey>,
    /// Depth-first pre-order: every part appears after its parent.
    order: Vec<PartKey>,
}

impl PartTreeTemplate {
    /// Bakes a part tree.
    ///
    /// Fails if a name is duplicated, a parent is unresolved, there is not
    /// exactly one root, or some part cannot be reached from the root.
    pub fn build(name: &str, specs: &[PartSpec]) -> Result<Self> {
        let mut parts: SlotMap<PartKey, Part> = SlotMap::with_capacity_and_key(specs.len());
        let mut by_name = FxHashMap::default();
        by_name.reserve(specs.len());

        // 1. Allocate every part so parents may be declared after children
        for spec in specs {
            if by_name.contains_key(&spec.name) {
                return Err(RigError::DuplicatePart(spec.name.clone()));
            }
            let key = parts.insert(Part {
                name: spec.name.clone(),
                parent: None,
                children: SmallVec::new(),
                rest: spec.rest,
                cuboids: spec.cuboids.clone(),
            });
            by_name.insert(spec.name.clone(), key);
        }

        // 2. Link parents and children
        let mut root: Option<PartKey> = None;
        for spec in specs {
            let key = by_name[&spec.name];
            match &spec.parent {
                None => {
                    if let Some(first) = root {
                        return Err(RigError::MultipleRoots {
                            first: parts[first].name.clone(),
                            second: spec.name.clone(),
                        });
                    }
                    root = Some(key);
                }
                Some(parent_name) => {
                    let parent = *by_name.get(parent_name).ok_or_else(|| RigError::UnknownParent {
                        part: spec.name.clone(),
                        parent: parent_name.clone(),
                    })?;
                    parts[key].parent = Some(parent);
                    parts[parent].children.push(key);
                }
            }
        }
        let root = root.ok_or(RigError::MissingRoot)?;

        // 3. Every part must hang off the root. Parts on a parent cycle are
        //    not descendants of the root, so the walk terminates without them.
        let mut order = Vec::with_capacity(parts.len());
        let mut stack = vec![root];
        while let Some(key) = stack.pop() {
            order.push(key);
            stack.extend(parts[key].children.iter().rev().copied());
        }

        if order.len() != parts.len() {
            let reached: FxHashSet<PartKey> = order.iter().copied().collect();
            let orphan = specs
                .iter()
                .find(|spec| !reached.contains(&by_name[&spec.name]))
                .map(|spec| spec.name.clone())
                .unwrap_or_default();
            return Err(RigError::Cycle(orphan));
        }

        log::debug!("Baked part tree '{}' with {} parts", name, parts.len());

        Ok(Self {
            name: name.to_string(),
            parts,
            root,
            by_name,
            order,
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> PartKey {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn part(&self, key: PartKey) -> Option<&Part> {
        self.parts.get(key)
    }

    /// Looks up a part by its name.
    #[inline]
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PartKey> {
        self.by_name.get(name).copied()
    }

    /// Parts in depth-first order, parents before children.
    #[inline]
    #[must_use]
    pub fn order(&self) -> &[PartKey] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartKey, &Part)> {
        self.order.iter().map(move |&key| (key, &self.parts[key]))
    }
}
