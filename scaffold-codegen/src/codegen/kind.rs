//! Artifact kinds and their static descriptors

use std::fmt;

use super::naming::to_type_suffix;
use super::templates;

/// One of the ten generated file categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Entity,
    Dto,
    Mapper,
    Transformer,
    Repository,
    Dao,
    DaoImpl,
    Service,
    ServiceImpl,
    Controller,
}

/// Where a kind's file lives below `<namespace>/<package>/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// Its own sub-package, one directory per segment
    Package(&'static [&'static str]),
    /// The directory of another kind (implementations sit next to their interface)
    SameAs(ArtifactKind),
}

/// How the type name is formed from the class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixRule {
    /// The class name itself
    Bare,
    /// Capitalized last segment of the kind's sub-package
    LastSegment,
    /// A fixed suffix
    Fixed(&'static str),
}

/// Static descriptor of an artifact kind
#[derive(Debug)]
pub struct KindSpec {
    pub template: &'static str,
    pub path: PathRule,
    pub suffix: SuffixRule,
}

static ENTITY: KindSpec = KindSpec {
    template: templates::ENTITY,
    path: PathRule::Package(&["model"]),
    suffix: SuffixRule::Bare,
};

static DTO: KindSpec = KindSpec {
    template: templates::DTO,
    path: PathRule::Package(&["dto"]),
    suffix: SuffixRule::LastSegment,
};

static MAPPER: KindSpec = KindSpec {
    template: templates::MAPPER,
    path: PathRule::Package(&["transformer", "mapper"]),
    suffix: SuffixRule::LastSegment,
};

static TRANSFORMER: KindSpec = KindSpec {
    template: templates::TRANSFORMER,
    path: PathRule::Package(&["transformer"]),
    suffix: SuffixRule::LastSegment,
};

static REPOSITORY: KindSpec = KindSpec {
    template: templates::REPOSITORY,
    path: PathRule::Package(&["dao", "repo"]),
    suffix: SuffixRule::LastSegment,
};

static DAO: KindSpec = KindSpec {
    template: templates::DAO,
    path: PathRule::Package(&["dao"]),
    suffix: SuffixRule::LastSegment,
};

static DAO_IMPL: KindSpec = KindSpec {
    template: templates::DAO_IMPL,
    path: PathRule::SameAs(ArtifactKind::Dao),
    suffix: SuffixRule::Fixed("DaoImpl"),
};

static SERVICE: KindSpec = KindSpec {
    template: templates::SERVICE,
    path: PathRule::Package(&["service"]),
    suffix: SuffixRule::LastSegment,
};

static SERVICE_IMPL: KindSpec = KindSpec {
    template: templates::SERVICE_IMPL,
    path: PathRule::SameAs(ArtifactKind::Service),
    suffix: SuffixRule::Fixed("ServiceImpl"),
};

static CONTROLLER: KindSpec = KindSpec {
    template: templates::CONTROLLER,
    path: PathRule::Package(&["controller"]),
    suffix: SuffixRule::LastSegment,
};

impl ArtifactKind {
    /// Every kind, in generation order
    pub const ALL: [ArtifactKind; 10] = [
        ArtifactKind::Entity,
        ArtifactKind::Dto,
        ArtifactKind::Mapper,
        ArtifactKind::Transformer,
        ArtifactKind::Repository,
        ArtifactKind::Dao,
        ArtifactKind::DaoImpl,
        ArtifactKind::Service,
        ArtifactKind::ServiceImpl,
        ArtifactKind::Controller,
    ];

    /// Descriptor for this kind
    pub fn spec(self) -> &'static KindSpec {
        match self {
            Self::Entity => &ENTITY,
            Self::Dto => &DTO,
            Self::Mapper => &MAPPER,
            Self::Transformer => &TRANSFORMER,
            Self::Repository => &REPOSITORY,
            Self::Dao => &DAO,
            Self::DaoImpl => &DAO_IMPL,
            Self::Service => &SERVICE,
            Self::ServiceImpl => &SERVICE_IMPL,
            Self::Controller => &CONTROLLER,
        }
    }

    /// Template text for this kind
    pub fn template(self) -> &'static str {
        self.spec().template
    }

    /// Sub-package segments below the feature package, after following `SameAs`
    pub fn package_segments(self) -> &'static [&'static str] {
        match self.spec().path {
            PathRule::Package(segments) => segments,
            PathRule::SameAs(other) => other.package_segments(),
        }
    }

    /// Suffix appended to the class name
    pub fn type_suffix(self) -> String {
        match self.spec().suffix {
            SuffixRule::Bare => String::new(),
            SuffixRule::Fixed(suffix) => suffix.to_string(),
            SuffixRule::LastSegment => self
                .package_segments()
                .last()
                .map(|segment| to_type_suffix(segment))
                .unwrap_or_default(),
        }
    }

    /// Java type name for a class, e.g. `Order` -> `OrderServiceImpl`
    pub fn type_name(self, class_name: &str) -> String {
        format!("{}{}", class_name, self.type_suffix())
    }

    /// Java source file name for a class
    pub fn file_name(self, class_name: &str) -> String {
        format!("{}.java", self.type_name(class_name))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entity => "entity",
            Self::Dto => "dto",
            Self::Mapper => "mapper",
            Self::Transformer => "transformer",
            Self::Repository => "repository",
            Self::Dao => "dao",
            Self::DaoImpl => "dao-impl",
            Self::Service => "service",
            Self::ServiceImpl => "service-impl",
            Self::Controller => "controller",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_kinds_are_distinct() {
        let unique: HashSet<_> = ArtifactKind::ALL.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_file_names() {
        let names: Vec<String> = ArtifactKind::ALL
            .iter()
            .map(|k| k.file_name("Order"))
            .collect();
        assert_eq!(
            names,
            vec![
                "Order.java",
                "OrderDto.java",
                "OrderMapper.java",
                "OrderTransformer.java",
                "OrderRepo.java",
                "OrderDao.java",
                "OrderDaoImpl.java",
                "OrderService.java",
                "OrderServiceImpl.java",
                "OrderController.java",
            ]
        );
    }

    #[test]
    fn test_implementations_share_interface_package() {
        assert_eq!(
            ArtifactKind::DaoImpl.package_segments(),
            ArtifactKind::Dao.package_segments()
        );
        assert_eq!(
            ArtifactKind::ServiceImpl.package_segments(),
            ArtifactKind::Service.package_segments()
        );
        for kind in ArtifactKind::ALL {
            assert!(!kind.package_segments().contains(&"impl"), "{kind}");
        }
    }

    #[test]
    fn test_nested_package_segments() {
        assert_eq!(
            ArtifactKind::Mapper.package_segments(),
            &["transformer", "mapper"]
        );
        assert_eq!(ArtifactKind::Repository.package_segments(), &["dao", "repo"]);
        assert_eq!(ArtifactKind::Entity.package_segments(), &["model"]);
    }

    #[test]
    fn test_every_kind_has_a_template() {
        for kind in ArtifactKind::ALL {
            assert!(kind.template().contains("{{ClassName}}"), "{kind}");
        }
    }
}
