//! Built-in reference datasets.
//!
//! These are load-time constants: they are applied to the database and then
//! discarded. Nothing mutates them at runtime.

use crate::error::{CoreError, CoreResult};
use crate::record::{BoardRecord, RoleRecord};
use crate::sql::insert_ignore_sql;

/// A single record prepared for the direct-row REST path.
#[derive(Debug, Clone)]
pub struct SeedRow {
    /// Natural key, used for per-record reporting.
    pub name: &'static str,
    /// JSON body posted to the table resource.
    pub body: serde_json::Value,
}

/// A seedable reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    JobBoards,
    JobRoles,
}

impl Dataset {
    /// All datasets, in seeding order.
    pub const ALL: &'static [Dataset] = &[Dataset::JobBoards, Dataset::JobRoles];

    /// Resolve a destination table name to its dataset.
    pub fn from_table(table: &str) -> CoreResult<Self> {
        match table {
            "job_boards" => Ok(Dataset::JobBoards),
            "job_roles" => Ok(Dataset::JobRoles),
            _ => Err(CoreError::UnknownDataset {
                table: table.to_string(),
                known: "job_boards, job_roles",
            }),
        }
    }

    /// Destination table name.
    pub fn table(&self) -> &'static str {
        match self {
            Dataset::JobBoards => "job_boards",
            Dataset::JobRoles => "job_roles",
        }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        match self {
            Dataset::JobBoards => BOARDS.len(),
            Dataset::JobRoles => ROLES.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records serialized for the direct-row REST transport.
    pub fn rows(&self) -> CoreResult<Vec<SeedRow>> {
        match self {
            Dataset::JobBoards => BOARDS
                .iter()
                .map(|r| {
                    Ok(SeedRow {
                        name: r.name,
                        body: serde_json::to_value(r)?,
                    })
                })
                .collect(),
            Dataset::JobRoles => ROLES
                .iter()
                .map(|r| {
                    Ok(SeedRow {
                        name: r.name,
                        body: serde_json::to_value(r)?,
                    })
                })
                .collect(),
        }
    }

    /// A conflict-ignoring INSERT covering every record, for the SQL
    /// transports.
    pub fn insert_sql(&self) -> String {
        match self {
            Dataset::JobBoards => insert_ignore_sql(
                self.table(),
                BoardRecord::COLUMNS,
                &BOARDS
                    .iter()
                    .map(|r| r.values().to_vec())
                    .collect::<Vec<_>>(),
                "name",
            ),
            Dataset::JobRoles => insert_ignore_sql(
                self.table(),
                RoleRecord::COLUMNS,
                &ROLES
                    .iter()
                    .map(|r| r.values().to_vec())
                    .collect::<Vec<_>>(),
                "name",
            ),
        }
    }
}

/// The 44 job boards seeded by migration 018.
pub static BOARDS: &[BoardRecord] = &[
    BoardRecord {
        name: "Dice",
        url: "https://www.dice.com",
        category: "tech",
        industry: "Technology",
        description: "Tech-focused job board for IT and software roles",
    },
    BoardRecord {
        name: "Stack Overflow Jobs",
        url: "https://stackoverflow.com/jobs",
        category: "tech",
        industry: "Technology",
        description: "Developer jobs on Stack Overflow platform",
    },
    BoardRecord {
        name: "Built In",
        url: "https://builtin.com/jobs",
        category: "tech",
        industry: "Technology",
        description: "Tech jobs with company insights",
    },
    BoardRecord {
        name: "AngelList Talent",
        url: "https://angel.co/jobs",
        category: "tech",
        industry: "Technology",
        description: "Startup and tech jobs on AngelList",
    },
    BoardRecord {
        name: "Hired",
        url: "https://hired.com",
        category: "tech",
        industry: "Technology",
        description: "Reverse recruitment for tech professionals",
    },
    BoardRecord {
        name: "ConstructionJobs.com",
        url: "https://www.constructionjobs.com",
        category: "niche",
        industry: "Construction",
        description: "Dedicated construction job board",
    },
    BoardRecord {
        name: "iHireConstruction",
        url: "https://www.ihireconstruction.com",
        category: "niche",
        industry: "Construction",
        description: "Construction and skilled trades jobs",
    },
    BoardRecord {
        name: "Roadtechs",
        url: "https://www.roadtechs.com",
        category: "niche",
        industry: "Construction",
        description: "Road and highway construction jobs",
    },
    BoardRecord {
        name: "Tradesmen International",
        url: "https://jobs.tradesmeninternational.com",
        category: "niche",
        industry: "Construction",
        description: "Skilled trades and union jobs",
    },
    BoardRecord {
        name: "TruckersReport Jobs",
        url: "https://www.thetruckersreport.com/jobs",
        category: "niche",
        industry: "Transportation & Logistics",
        description: "Truck driving and transportation jobs",
    },
    BoardRecord {
        name: "CDL Job Now",
        url: "https://cdljobnow.com",
        category: "niche",
        industry: "Transportation & Logistics",
        description: "CDL and commercial driver jobs",
    },
    BoardRecord {
        name: "JobsInLogistics",
        url: "https://www.jobsinlogistics.com",
        category: "niche",
        industry: "Transportation & Logistics",
        description: "Logistics and supply chain jobs",
    },
    BoardRecord {
        name: "FleetJobs",
        url: "https://www.fleetjobs.com",
        category: "niche",
        industry: "Transportation & Logistics",
        description: "Fleet management and driving jobs",
    },
    BoardRecord {
        name: "HCareers",
        url: "https://www.hcareers.com",
        category: "niche",
        industry: "Retail & Hospitality",
        description: "Hospitality and food service jobs",
    },
    BoardRecord {
        name: "Poached Jobs",
        url: "https://poachedjobs.com",
        category: "niche",
        industry: "Retail & Hospitality",
        description: "Chef and culinary positions",
    },
    BoardRecord {
        name: "Culinary Agents",
        url: "https://culinaryagents.com",
        category: "niche",
        industry: "Retail & Hospitality",
        description: "Executive chef and culinary jobs",
    },
    BoardRecord {
        name: "AllRetailJobs",
        url: "https://www.allretailjobs.com",
        category: "niche",
        industry: "Retail & Hospitality",
        description: "Retail store and sales positions",
    },
    BoardRecord {
        name: "Behance Job Board",
        url: "https://www.behance.net/joblist",
        category: "niche",
        industry: "Creative & Media",
        description: "Creative and design jobs",
    },
    BoardRecord {
        name: "Dribbble Jobs",
        url: "https://dribbble.com/jobs",
        category: "niche",
        industry: "Creative & Media",
        description: "Designer and creative roles",
    },
    BoardRecord {
        name: "We Work Remotely",
        url: "https://weworkremotely.com",
        category: "remote",
        industry: "Creative & Media",
        description: "Remote creative jobs",
    },
    BoardRecord {
        name: "The Muse",
        url: "https://www.themuse.com/jobs",
        category: "general",
        industry: "Creative & Media",
        description: "Career discovery with creative positions",
    },
    BoardRecord {
        name: "BioSpace",
        url: "https://www.biospace.com/jobs",
        category: "niche",
        industry: "Science & Biotech",
        description: "Biotech and life sciences jobs",
    },
    BoardRecord {
        name: "Science Careers",
        url: "https://jobs.sciencecareers.org",
        category: "niche",
        industry: "Science & Biotech",
        description: "Science and research positions",
    },
    BoardRecord {
        name: "Nature Careers",
        url: "https://www.nature.com/naturecareers",
        category: "niche",
        industry: "Science & Biotech",
        description: "Scientific research jobs",
    },
    BoardRecord {
        name: "PharmiWeb",
        url: "https://www.pharmiweb.jobs",
        category: "niche",
        industry: "Science & Biotech",
        description: "Pharmaceutical and biotech careers",
    },
    BoardRecord {
        name: "HigherEdJobs",
        url: "https://www.higheredjobs.com",
        category: "niche",
        industry: "Education",
        description: "University and faculty positions",
    },
    BoardRecord {
        name: "Chronicle Jobs",
        url: "https://jobs.chronicle.com",
        category: "niche",
        industry: "Education",
        description: "Academic and research positions",
    },
    BoardRecord {
        name: "K12JobSpot",
        url: "https://www.k12jobspot.com",
        category: "niche",
        industry: "Education",
        description: "K-12 and school district jobs",
    },
    BoardRecord {
        name: "TeachAway",
        url: "https://www.teachaway.com",
        category: "niche",
        industry: "Education",
        description: "Teaching jobs at schools worldwide",
    },
    BoardRecord {
        name: "USAJobs",
        url: "https://www.usajobs.gov",
        category: "general",
        industry: "Government",
        description: "Official US federal government jobs",
    },
    BoardRecord {
        name: "GovernmentJobs.com",
        url: "https://www.governmentjobs.com",
        category: "general",
        industry: "Government",
        description: "State and local government positions",
    },
    BoardRecord {
        name: "Careers in Government",
        url: "https://www.careersingovernment.com",
        category: "niche",
        industry: "Government",
        description: "Public sector career board",
    },
    BoardRecord {
        name: "eFinancialCareers",
        url: "https://www.efinancialcareers.com",
        category: "niche",
        industry: "Finance & Accounting",
        description: "Finance and banking jobs",
    },
    BoardRecord {
        name: "AccountingJobsToday",
        url: "https://www.accountingjobstoday.com",
        category: "niche",
        industry: "Finance & Accounting",
        description: "Accounting and CPA positions",
    },
    BoardRecord {
        name: "FinancialJobBank",
        url: "https://www.financialjobbank.com",
        category: "niche",
        industry: "Finance & Accounting",
        description: "Financial services and banking",
    },
    BoardRecord {
        name: "LawCrossing",
        url: "https://www.lawcrossing.com",
        category: "niche",
        industry: "Legal",
        description: "Lawyer and legal professional jobs",
    },
    BoardRecord {
        name: "NALP Jobs",
        url: "https://jobs.nalp.org",
        category: "niche",
        industry: "Legal",
        description: "Law firm and legal positions",
    },
    BoardRecord {
        name: "LawJobs.com",
        url: "https://www.lawjobs.com",
        category: "niche",
        industry: "Legal",
        description: "Attorney and legal career board",
    },
    BoardRecord {
        name: "ManufacturingJobs.com",
        url: "https://www.manufacturingjobs.com",
        category: "niche",
        industry: "Manufacturing",
        description: "Manufacturing and factory jobs",
    },
    BoardRecord {
        name: "iHireManufacturing",
        url: "https://www.ihiremanufacturing.com",
        category: "niche",
        industry: "Manufacturing",
        description: "Factory and production positions",
    },
    BoardRecord {
        name: "Engineering.com Jobs",
        url: "https://www.engineering.com/jobs",
        category: "niche",
        industry: "Manufacturing",
        description: "Engineering and technical jobs",
    },
    BoardRecord {
        name: "RemoteOK",
        url: "https://remoteok.com",
        category: "remote",
        industry: "Remote",
        description: "Remote jobs across all industries",
    },
    BoardRecord {
        name: "FlexJobs",
        url: "https://www.flexjobs.com",
        category: "remote",
        industry: "Remote",
        description: "Flexible and remote positions",
    },
    BoardRecord {
        name: "Working Nomads",
        url: "https://www.workingnomads.com",
        category: "remote",
        industry: "Remote",
        description: "Remote work for digital nomads",
    },
];

/// The 20 job roles seeded by migration 017.
pub static ROLES: &[RoleRecord] = &[
    RoleRecord {
        name: "Frontend Developer",
        description: "Frontend/UI developer positions",
    },
    RoleRecord {
        name: "Backend Developer",
        description: "Server-side and backend development",
    },
    RoleRecord {
        name: "Full Stack Developer",
        description: "Full stack development roles",
    },
    RoleRecord {
        name: "Data Scientist",
        description: "Data science and analytics roles",
    },
    RoleRecord {
        name: "DevOps Engineer",
        description: "DevOps, infrastructure, cloud engineering",
    },
    RoleRecord {
        name: "Product Manager",
        description: "Product management positions",
    },
    RoleRecord {
        name: "Designer",
        description: "UX/UI and design roles",
    },
    RoleRecord {
        name: "Sales",
        description: "Sales and account management",
    },
    RoleRecord {
        name: "Marketing",
        description: "Marketing and growth roles",
    },
    RoleRecord {
        name: "Operations",
        description: "Operations and business roles",
    },
    RoleRecord {
        name: "Executive",
        description: "C-level and executive positions",
    },
    RoleRecord {
        name: "Construction Worker",
        description: "Construction and skilled trades",
    },
    RoleRecord {
        name: "Truck Driver",
        description: "Transportation and logistics",
    },
    RoleRecord {
        name: "Retail",
        description: "Retail and hospitality roles",
    },
    RoleRecord {
        name: "Accountant",
        description: "Accounting and finance",
    },
    RoleRecord {
        name: "Lawyer",
        description: "Legal positions",
    },
    RoleRecord {
        name: "Healthcare",
        description: "Healthcare and medical roles",
    },
    RoleRecord {
        name: "Teacher",
        description: "Education and teaching positions",
    },
    RoleRecord {
        name: "Scientist",
        description: "Research and scientific positions",
    },
    RoleRecord {
        name: "Manufacturer",
        description: "Manufacturing and production",
    },
];

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
