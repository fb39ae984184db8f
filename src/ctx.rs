//! Per-kind handler dispatch context: an opaque bag carrying the source and
//! target `Inspection`s plus server-version metadata.

use crate::inspection::Inspection;

pub struct PlanContext<'a> {
    pub source: &'a Inspection,
    pub target: &'a Inspection,
}

impl<'a> PlanContext<'a> {
    pub fn new(source: &'a Inspection, target: &'a Inspection) -> Self {
        PlanContext { source, target }
    }

    /// Server version of whichever inspection carries one; handlers may
    /// consult it but the shipped handlers do not require it.
    pub fn server_version_num(&self) -> Option<i32> {
        self.target.server_version_num.or(self.source.server_version_num)
    }
}
