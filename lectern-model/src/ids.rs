use uuid::Uuid;

/// Strongly typed ID for courses
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseID(pub Uuid);

impl Default for CourseID {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseID {
    pub fn new() -> Self {
        CourseID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for CourseID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for CourseID {
    fn from(id: Uuid) -> Self {
        CourseID(id)
    }
}

impl std::fmt::Display for CourseID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for lectures
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LectureID(pub Uuid);

impl Default for LectureID {
    fn default() -> Self {
        Self::new()
    }
}

impl LectureID {
    pub fn new() -> Self {
        LectureID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for LectureID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for LectureID {
    fn from(id: Uuid) -> Self {
        LectureID(id)
    }
}

impl std::fmt::Display for LectureID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lecture identity within a course, the unit all progress reports key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LectureKey {
    pub course_id: CourseID,
    pub lecture_id: LectureID,
}

impl LectureKey {
    pub fn new(course_id: CourseID, lecture_id: LectureID) -> Self {
        Self {
            course_id,
            lecture_id,
        }
    }
}
