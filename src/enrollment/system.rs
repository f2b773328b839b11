//! Enrollment system: students, courses, hackers and one social queue per
//! course, plus the hack pass that pushes hackers into their desired courses.

use super::measures::{self, StudentRef};
use super::records::{self, Course, Student};
use crate::config::EnrollmentConfig;
use crate::error::EnrollmentError;
use crate::queue::SocialQueue;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Queue of one course, with the course's capacity.
pub struct CourseQueue {
    pub course: Course,
    pub queue: SocialQueue<StudentRef>,
}

impl CourseQueue {
    /// Whether `student` sits within the first `size` places, checked on a
    /// copy so the queue itself is untouched.
    pub fn admits(&self, student: u64) -> bool {
        let mut line = self.queue.clone();
        (0..self.course.size)
            .map_while(|_| line.dequeue())
            .any(|s| s.id == student)
    }

    pub fn student_ids(&self) -> Vec<u64> {
        self.queue.iter().map(|s| s.id).collect()
    }
}

/// Result of the hack pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackOutcome {
    /// Every hacker got what they asked for.
    Satisfied,
    /// First hacker, in hackers-file order, left without enough courses.
    Unsatisfied(u64),
}

pub struct EnrollmentSystem {
    settings: EnrollmentConfig,
    students: HashMap<u64, StudentRef>,
    courses: Vec<Course>,
    hackers: Vec<StudentRef>,
    queues: Vec<CourseQueue>,
}

impl EnrollmentSystem {
    /// Load students and courses and attach every hacker profile to its
    /// student.
    pub fn create(
        students: &str,
        courses: &str,
        hackers: &str,
        settings: EnrollmentConfig,
    ) -> Result<Self, EnrollmentError> {
        let mut students: Vec<Student> = records::parse_students(students)?;
        let courses = records::parse_courses(courses)?;
        let hacker_records = records::parse_hackers(hackers)?;

        let position: HashMap<u64, usize> =
            students.iter().enumerate().map(|(i, s)| (s.id, i)).collect();

        for record in &hacker_records {
            let index = *position
                .get(&record.id)
                .ok_or(EnrollmentError::UnknownStudent(record.id))?;
            if let Some(missing) = record
                .profile
                .desired_courses
                .iter()
                .find(|&&number| !courses.iter().any(|c| c.number == number))
            {
                return Err(EnrollmentError::UnknownCourse(*missing));
            }
            students[index].hacker = Some(record.profile.clone());
        }

        let students: HashMap<u64, StudentRef> = students
            .into_iter()
            .map(|s| (s.id, Rc::new(s)))
            .collect();
        let hackers = hacker_records
            .iter()
            .filter_map(|record| students.get(&record.id).cloned())
            .collect::<Vec<_>>();

        info!(
            students = students.len(),
            courses = courses.len(),
            hackers = hackers.len(),
            "Enrollment records loaded"
        );

        Ok(Self {
            settings,
            students,
            courses,
            hackers,
            queues: Vec::new(),
        })
    }

    /// Build one queue per line of the queues file, enqueueing the listed
    /// students in order, then register the configured measures.
    pub fn read_queues(&mut self, queues: &str) -> Result<(), EnrollmentError> {
        for record in records::parse_queues(queues)? {
            let course = self.course(record.course)?;
            let mut queue = self.empty_queue();
            for id in &record.students {
                let student = self
                    .students
                    .get(id)
                    .ok_or(EnrollmentError::UnknownStudent(*id))?;
                queue.enqueue(Rc::clone(student));
            }
            for measure in measures::configured(&self.settings) {
                queue.add_measure(measure)?;
            }
            debug!(course = course.number, queued = record.students.len(), "Course queue read");
            self.queues.push(CourseQueue { course, queue });
        }

        info!(queues = self.queues.len(), "Course queues ready");
        Ok(())
    }

    /// Enqueue each hacker into each desired course, then report the first
    /// hacker left unsatisfied.
    ///
    /// A hacker already in a course's queue is not enqueued there again. A
    /// desired course missing from the queues file gets an empty queue,
    /// listed after the others.
    pub fn hack_enrollment(&mut self) -> Result<HackOutcome, EnrollmentError> {
        for hacker in self.hackers.clone() {
            let desired = hacker
                .hacker
                .as_ref()
                .map(|p| p.desired_courses.clone())
                .unwrap_or_default();
            for number in desired {
                let index = self.queue_index(number)?;
                let entry = &mut self.queues[index];
                if entry.queue.contains(&hacker) {
                    debug!(hacker = hacker.id, course = number, "Hacker already queued");
                    continue;
                }
                entry.queue.enqueue(Rc::clone(&hacker));
            }
        }

        for hacker in &self.hackers {
            if !self.is_satisfied(hacker) {
                warn!(hacker = hacker.id, "Cannot satisfy hacker");
                return Ok(HackOutcome::Unsatisfied(hacker.id));
            }
        }

        info!(hackers = self.hackers.len(), "All hackers satisfied");
        Ok(HackOutcome::Satisfied)
    }

    /// Placed within capacity in two desired courses, or in the only one,
    /// or desiring nothing.
    pub fn is_satisfied(&self, hacker: &Student) -> bool {
        let Some(profile) = hacker.hacker.as_ref() else {
            return true;
        };
        let placed = profile
            .desired_courses
            .iter()
            .filter(|&&number| {
                self.queues
                    .iter()
                    .find(|q| q.course.number == number)
                    .is_some_and(|q| q.admits(hacker.id))
            })
            .count();

        match profile.desired_courses.len() {
            0 => true,
            1 => placed == 1,
            _ => placed >= 2,
        }
    }

    pub fn queues(&self) -> &[CourseQueue] {
        &self.queues
    }

    pub fn hackers(&self) -> &[StudentRef] {
        &self.hackers
    }

    pub fn student(&self, id: u64) -> Option<&StudentRef> {
        self.students.get(&id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn course(&self, number: u64) -> Result<Course, EnrollmentError> {
        self.courses
            .iter()
            .find(|c| c.number == number)
            .copied()
            .ok_or(EnrollmentError::UnknownCourse(number))
    }

    fn queue_index(&mut self, number: u64) -> Result<usize, EnrollmentError> {
        if let Some(index) = self.queues.iter().position(|q| q.course.number == number) {
            return Ok(index);
        }
        let course = self.course(number)?;
        let mut queue = self.empty_queue();
        for measure in measures::configured(&self.settings) {
            queue.add_measure(measure)?;
        }
        debug!(course = number, "Opened queue for course missing from queues file");
        self.queues.push(CourseQueue { course, queue });
        Ok(self.queues.len() - 1)
    }

    fn empty_queue(&self) -> SocialQueue<StudentRef> {
        SocialQueue::new(
            Vec::new(),
            Some(measures::by_id()),
            self.settings.friendship_threshold,
            self.settings.rivalry_threshold,
        )
    }
}
