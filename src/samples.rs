//! Canned sample postings used to pre-fill the analyzer for demo purposes

/// A bundled demo job posting.
#[derive(Debug, Clone, Copy)]
pub struct SamplePosting {
    pub title: &'static str,
    pub text: &'static str,
}

pub const SAMPLE_POSTINGS: &[SamplePosting] = &[
    SamplePosting {
        title: "Senior Frontend Developer — Itaú",
        text: "Buscamos um desenvolvedor Frontend Sênior apaixonado por criar experiências digitais de alta qualidade.

Requisitos:
- 4+ anos de experiência com React e TypeScript
- Experiência com Next.js e SSR
- Conhecimento de testes unitários (Jest, Testing Library)
- Familiaridade com Docker e CI/CD pipelines
- Experiência com design systems e Figma
- Scrum/Agile mindset

Diferencial:
- AWS ou Azure
- GraphQL
- Micro-frontends",
    },
    SamplePosting {
        title: "Tech Lead — Startup Fintech",
        text: "Tech Lead para liderar time de 5 devs em startup fintech de alto crescimento.

Stack: React, Node.js, TypeScript, PostgreSQL, AWS
Metodologia: Scrum com sprints de 2 semanas

Requisitos:
- 6+ anos de experiência em desenvolvimento
- Experiência com arquitetura de microservices
- Docker e Kubernetes
- CI/CD pipelines
- Mentoring de desenvolvedores juniores
- Redis e MongoDB
- GraphQL",
    },
    SamplePosting {
        title: "Desenvolvedor Full Stack — Remote",
        text: "Empresa de SaaS B2B procura desenvolvedor Full Stack para trabalho 100% remoto.

Tecnologias: React, TypeScript, Node.js, PostgreSQL

Requisitos:
- 3+ anos de experiência full stack
- React e Node.js sólido
- Banco de dados relacionais e NoSQL
- REST APIs
- Testes automatizados
- Comunicação em inglês (reuniões mensais)",
    },
];

/// Look up a bundled sample posting by 1-based index.
pub fn get(index: usize) -> Option<&'static SamplePosting> {
    index.checked_sub(1).and_then(|i| SAMPLE_POSTINGS.get(i))
}
