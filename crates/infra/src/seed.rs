//! Default storefront content.
//!
//! Every record is built through its domain constructor, so seeded data passes
//! the same validation as anything created at runtime.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use renoovy_catalog::{NewPackage, Package, PackageId};
use renoovy_content::{Benefit, BenefitId, Faq, FaqId, NewBenefit, NewFaq};
use renoovy_core::{DomainResult, Money, Rating};
use renoovy_reviews::{NewTestimonial, Testimonial, TestimonialId};

use crate::repository::InMemoryRepository;

/// Repositories pre-filled with the default storefront content.
#[derive(Debug)]
pub struct SeededRepositories {
    pub packages: InMemoryRepository<Package>,
    pub testimonials: InMemoryRepository<Testimonial>,
    pub faqs: InMemoryRepository<Faq>,
    pub benefits: InMemoryRepository<Benefit>,
}

pub fn seeded_repositories(at: DateTime<Utc>) -> DomainResult<SeededRepositories> {
    Ok(SeededRepositories {
        packages: InMemoryRepository::with_items(packages(at)?),
        testimonials: InMemoryRepository::with_items(testimonials(at)?),
        faqs: InMemoryRepository::with_items(faqs(at)?),
        benefits: InMemoryRepository::with_items(benefits(at)?),
    })
}

pub fn packages(at: DateTime<Utc>) -> DomainResult<Vec<Package>> {
    let rows: [(&str, u32, &str, i64, i64, bool); 3] = [
        ("pkg_1", 1, "Experimente e Apaixone-se", 297, 34, false),
        ("pkg_3", 3, "Seu Tratamento Completo", 594, 50, true),
        ("pkg_5", 5, "Melhor Custo-Benefício", 999, 60, false),
    ];

    rows.into_iter()
        .map(|(id, quantity, title, price, discount, popular)| {
            let mut data = NewPackage::new(
                PackageId::parse(id)?,
                quantity,
                title,
                Money::brl(Decimal::from(price))?,
                Decimal::from(discount),
                at,
            );
            data.popular = popular;
            Package::new(data)
        })
        .collect()
}

pub fn testimonials(at: DateTime<Utc>) -> DomainResult<Vec<Testimonial>> {
    let rows: [(&str, &str, &str, bool); 4] = [
        (
            "test_1",
            "Fernanda Silva",
            "Minha pele está mais firme e radiante! Amo os resultados!",
            true,
        ),
        (
            "test_2",
            "Marília Moreira",
            "Chegou rápido e está fazendo diferença, as pessoas estão comentando!",
            true,
        ),
        (
            "test_3",
            "Paula Martins",
            "Já é a minha 3ª compra, ótimo produto e de boa absorção.",
            false,
        ),
        (
            "test_4",
            "Beatriz Santos",
            "Muito bom, comprei a opção com 3 potes, na próxima já compro o de 5!",
            false,
        ),
    ];

    rows.into_iter()
        .map(|(id, name, text, verified)| {
            let mut data = NewTestimonial::new(
                TestimonialId::parse(id)?,
                name,
                text,
                Rating::new(i64::from(Rating::MAX))?,
                at,
            );
            data.is_verified = verified;
            Testimonial::new(data)
        })
        .collect()
}

pub fn faqs(at: DateTime<Utc>) -> DomainResult<Vec<Faq>> {
    let rows: [(&str, &str, &str, &str); 6] = [
        (
            "faq_1",
            "Em quanto tempo vejo os resultados?",
            "A maioria dos clientes relata primeiros resultados entre 2-4 semanas de uso \
             contínuo. Para resultados mais significativos, recomendamos 3 meses de tratamento.",
            "uso",
        ),
        (
            "faq_2",
            "Renoovy+ funciona para mim?",
            "Renoovy+ foi formulado para atender a diversos tipos de pele e necessidades. \
             Com 22 ativos poderosos e 8 vitaminas essenciais, é altamente eficaz para a \
             maioria das pessoas.",
            "produto",
        ),
        (
            "faq_3",
            "Os resultados são comprovados cientificamente?",
            "Sim! Todos os ingredientes de Renoovy+ possuem comprovação científica e \
             estudos clínicos que atestam sua eficácia.",
            "produto",
        ),
        (
            "faq_4",
            "Quem pode usar Renoovy+?",
            "Renoovy+ é indicado para maiores de 18 anos. Gestantes e lactantes devem \
             consultar um médico antes de usar.",
            "uso",
        ),
        (
            "faq_5",
            "Renoovy+ tem efeitos colaterais?",
            "Renoovy+ é feito com ingredientes naturais e é geralmente bem tolerado. Consulte um \
             médico se tiver alergias a algum componente.",
            "segurança",
        ),
        (
            "faq_6",
            "É aprovado pela ANVISA?",
            "Sim! Renoovy+ é um produto registrado e aprovado pela Agência Nacional de \
             Vigilância Sanitária (ANVISA).",
            "segurança",
        ),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((id, question, answer, category), order)| {
            let data = NewFaq::new(FaqId::parse(id)?, question, answer, order, at);
            Faq::new(data.with_category(category))
        })
        .collect()
}

pub fn benefits(at: DateTime<Utc>) -> DomainResult<Vec<Benefit>> {
    let rows: [(&str, &str, &str, &str); 4] = [
        (
            "benefit_1",
            "Pele Radiante e Rejuvenescida",
            "Reduz visivelmente rugas e linhas de expressão, \
             promovendo uma pele mais jovem e luminosa.",
            "✨",
        ),
        (
            "benefit_2",
            "Firmeza e Elasticidade Aprimoradas",
            "Ativos poderosos que estimulam a produção de colágeno e elastina \
             para uma pele mais firme.",
            "💪",
        ),
        (
            "benefit_3",
            "Cabelos Fortes e Volumosos",
            "Nutrição profunda para combater a queda capilar \
             e estimular o crescimento de fios saudáveis.",
            "💇",
        ),
        (
            "benefit_4",
            "Unhas Saudáveis e Resistentes",
            "Fortalece suas unhas, deixando-as menos quebradiças e com um aspecto impecável.",
            "💅",
        ),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((id, title, description, icon), order)| {
            let id = BenefitId::parse(id)?;
            Benefit::new(NewBenefit::new(id, title, description, icon, order, at))
        })
        .collect()
}
