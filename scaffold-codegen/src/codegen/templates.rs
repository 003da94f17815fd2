//! Java source templates, one per artifact kind
//!
//! Placeholders use `{{name}}` so they never collide with Java braces.

pub const ENTITY: &str = r#"package {{namespace}}.{{package}}.model;

import {{namespace}}.{{corePackage}}.model.AbstractEntity;
import jakarta.persistence.*;
import lombok.AllArgsConstructor;
import lombok.Data;
import lombok.EqualsAndHashCode;
import lombok.NoArgsConstructor;

@EqualsAndHashCode(callSuper = true)
@NoArgsConstructor
@AllArgsConstructor
@Data
@Entity
@Table(name = "{{TableName}}")
public class {{ClassName}} extends AbstractEntity {
    @Id
    @GeneratedValue(strategy = GenerationType.SEQUENCE, generator = "{{TableName}}_id_sequence")
    @SequenceGenerator(name = "{{TableName}}_id_sequence", sequenceName = "{{TableName}}_id_sequence", allocationSize = 1)
    private Long id;

}
"#;

pub const DTO: &str = r#"package {{namespace}}.{{package}}.dto;

import {{namespace}}.{{corePackage}}.dto.AbstractDto;
import lombok.AllArgsConstructor;
import lombok.Data;
import lombok.EqualsAndHashCode;
import lombok.NoArgsConstructor;

@EqualsAndHashCode(callSuper = true)
@NoArgsConstructor
@AllArgsConstructor
@Data
public class {{ClassName}}Dto extends AbstractDto {
    private Long id;

}
"#;

pub const MAPPER: &str = r#"package {{namespace}}.{{package}}.transformer.mapper;

import org.mapstruct.InjectionStrategy;
import org.mapstruct.Mapper;
import {{namespace}}.{{package}}.dto.{{ClassName}}Dto;
import {{namespace}}.{{package}}.model.{{ClassName}};
import {{namespace}}.{{corePackage}}.transformer.mapper.AbstractMapper;

@Mapper(componentModel = "spring", injectionStrategy = InjectionStrategy.CONSTRUCTOR)
public interface {{ClassName}}Mapper extends AbstractMapper<{{ClassName}}, {{ClassName}}Dto> {

}
"#;

pub const TRANSFORMER: &str = r#"package {{namespace}}.{{package}}.transformer;

import org.springframework.stereotype.Component;
import lombok.AllArgsConstructor;
import {{namespace}}.{{package}}.transformer.mapper.{{ClassName}}Mapper;
import {{namespace}}.{{package}}.dto.{{ClassName}}Dto;
import {{namespace}}.{{package}}.model.{{ClassName}};
import {{namespace}}.{{corePackage}}.transformer.AbstractTransformer;

@Component
@AllArgsConstructor
public class {{ClassName}}Transformer implements AbstractTransformer<{{ClassName}}, {{ClassName}}Dto, {{ClassName}}Mapper> {

    private final {{ClassName}}Mapper {{className}}Mapper;

    @Override
    public {{ClassName}}Mapper getMapper() {
        return {{className}}Mapper;
    }

}
"#;

pub const REPOSITORY: &str = r#"package {{namespace}}.{{package}}.dao.repo;

import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;
import {{namespace}}.{{package}}.model.{{ClassName}};

@Repository
public interface {{ClassName}}Repo extends JpaRepository<{{ClassName}}, Long> {

}
"#;

pub const DAO: &str = r#"package {{namespace}}.{{package}}.dao;

import {{namespace}}.{{package}}.model.{{ClassName}};
import {{namespace}}.{{corePackage}}.dao.AbstractDao;
import {{namespace}}.{{package}}.dao.repo.{{ClassName}}Repo;

public interface {{ClassName}}Dao extends AbstractDao<{{ClassName}}, {{ClassName}}Repo> {

}
"#;

pub const DAO_IMPL: &str = r#"package {{namespace}}.{{package}}.dao;

import org.springframework.stereotype.Component;
import lombok.AllArgsConstructor;
import {{namespace}}.{{package}}.dao.repo.{{ClassName}}Repo;

@Component
@AllArgsConstructor
public class {{ClassName}}DaoImpl implements {{ClassName}}Dao {

    private final {{ClassName}}Repo {{className}}Repo;

    @Override
    public {{ClassName}}Repo getRepo() {
        return {{className}}Repo;
    }

}
"#;

pub const SERVICE: &str = r#"package {{namespace}}.{{package}}.service;

import {{namespace}}.{{package}}.model.{{ClassName}};
import {{namespace}}.{{package}}.dto.{{ClassName}}Dto;
import {{namespace}}.{{package}}.transformer.{{ClassName}}Transformer;
import {{namespace}}.{{package}}.dao.{{ClassName}}Dao;
import {{namespace}}.{{corePackage}}.service.AbstractService;

public interface {{ClassName}}Service extends AbstractService<{{ClassName}}, {{ClassName}}Dto, {{ClassName}}Transformer, {{ClassName}}Dao> {

}
"#;

pub const SERVICE_IMPL: &str = r#"package {{namespace}}.{{package}}.service;

import lombok.AllArgsConstructor;
import lombok.extern.slf4j.Slf4j;
import org.springframework.stereotype.Service;
import {{namespace}}.{{package}}.dao.{{ClassName}}Dao;
import {{namespace}}.{{package}}.transformer.{{ClassName}}Transformer;

@Slf4j
@Service
@AllArgsConstructor
public class {{ClassName}}ServiceImpl implements {{ClassName}}Service {

    private final {{ClassName}}Dao {{className}}Dao;
    private final {{ClassName}}Transformer {{className}}Transformer;

    @Override
    public {{ClassName}}Dao getDao() {
        return {{className}}Dao;
    }

    @Override
    public {{ClassName}}Transformer getTransformer() {
        return {{className}}Transformer;
    }

}
"#;

pub const CONTROLLER: &str = r#"package {{namespace}}.{{package}}.controller;

import lombok.AllArgsConstructor;
import org.springframework.web.bind.annotation.RequestMapping;
import org.springframework.web.bind.annotation.RestController;
import {{namespace}}.{{package}}.dto.{{ClassName}}Dto;
import {{namespace}}.{{package}}.service.{{ClassName}}Service;
import {{namespace}}.{{corePackage}}.controller.AbstractController;
import {{namespace}}.{{corePackage}}.api.ApiResponseBuilder;

@RestController
@RequestMapping("/api/{{className}}")
@AllArgsConstructor
public class {{ClassName}}Controller implements AbstractController<{{ClassName}}Service, {{ClassName}}Dto> {

    private final {{ClassName}}Service {{className}}Service;
    private final ApiResponseBuilder<{{ClassName}}Dto> apiResponseBuilder;

    @Override
    public {{ClassName}}Service getService() {
        return {{className}}Service;
    }

    @Override
    public ApiResponseBuilder<{{ClassName}}Dto> getApiResponseBuilder() {
        return apiResponseBuilder;
    }

}
"#;
