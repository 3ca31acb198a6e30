//! Built-in catalog data

use crate::domain::entities::{Category, Template};

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new("development", "Desenvolvimento", development()),
        Category::new("agronegocio", "Agronegócio", agronegocio()),
        Category::new("deployment", "Deploy & DevOps", deployment()),
        Category::new("security", "Segurança", security()),
    ]
}

fn development() -> Vec<Template> {
    vec![
        Template::new(
            "create_project",
            "Criar Projeto",
            "Criar novo projeto com estrutura completa",
            "/create_project name={project_name} type={project_type} framework={framework}\n\n\
             Criar projeto {project_name} com:\n\n\
             ESTRUTURA:\n\
             - Arquitetura {framework} otimizada\n\
             - Configuração CI/CD\n\
             - Testes automatizados\n\
             - Documentação completa\n\
             - Deploy pronto produção\n\n\
             Siga P→E→V→R e RA. Zero conjecturas.\n\
             Entregue diffs + testes + comandos execução.",
            &["project_name", "project_type", "framework"],
            &[
                &[
                    ("project_name", "meu-app"),
                    ("project_type", "web_app"),
                    ("framework", "flask"),
                ],
                &[
                    ("project_name", "api-service"),
                    ("project_type", "api"),
                    ("framework", "fastapi"),
                ],
            ],
        ),
        Template::new(
            "debug_issue",
            "Debug Problema",
            "Debugar e corrigir problema específico",
            "/debug_issue file={file_path} symptom=\"{symptom}\" priority={priority}\n\n\
             Debugar problema em {file_path}:\n\n\
             SINTOMAS:\n\
             - {symptom}\n\
             - Comportamento esperado vs atual\n\
             - Logs/erros relevantes\n\n\
             OBJETIVO:\n\
             - Identificar causa raiz\n\
             - Implementar correção\n\
             - Adicionar testes preventivos\n\
             - Documentar solução\n\n\
             Siga P→E→V→R e RA. Evidências com paths+linhas.\n\
             Entregue patch + teste que falha→passa.",
            &["file_path", "symptom", "priority"],
            &[
                &[
                    ("file_path", "src/api/users.py"),
                    ("symptom", "timeout em requests"),
                    ("priority", "high"),
                ],
                &[
                    ("file_path", "frontend/components/Form.tsx"),
                    ("symptom", "validação não funciona"),
                    ("priority", "medium"),
                ],
            ],
        ),
        Template::new(
            "optimize_performance",
            "Otimizar Performance",
            "Otimizar performance de código/sistema",
            "/optimize_performance target={target_component} metric={performance_metric} goal={target_goal}\n\n\
             Otimizar performance de {target_component}:\n\n\
             MÉTRICAS ATUAIS:\n\
             - {performance_metric} atual\n\
             - Gargalos identificados\n\
             - Recursos consumidos\n\n\
             META:\n\
             - {target_goal}\n\
             - Manter funcionalidade\n\
             - Adicionar monitoramento\n\n\
             Siga P→E→V→R e RA. Benchmarks antes/depois.\n\
             Entregue otimizações + testes performance.",
            &["target_component", "performance_metric", "target_goal"],
            &[
                &[
                    ("target_component", "database queries"),
                    ("performance_metric", "response time 2s"),
                    ("target_goal", "< 500ms"),
                ],
                &[
                    ("target_component", "frontend bundle"),
                    ("performance_metric", "size 2MB"),
                    ("target_goal", "< 1MB"),
                ],
            ],
        ),
    ]
}

fn agronegocio() -> Vec<Template> {
    vec![
        Template::new(
            "compliance_audit",
            "Auditoria Compliance",
            "Auditoria compliance fiscal agronegócio",
            "/audit_compliance_agro state={state} erp={erp_system} urgency={urgency_level}\n\n\
             Auditoria compliance agronegócio:\n\n\
             CONTEXTO:\n\
             - Estado: {state}\n\
             - ERP: {erp_system}\n\
             - Urgência: {urgency_level}\n\
             - Safra 2024/25 ativa\n\n\
             FOCO:\n\
             - NFP-e SEFAZ-{state}\n\
             - Certificado digital A1/A3\n\
             - Integração {erp_system}\n\
             - FUNRURAL + SPED\n\n\
             Siga P→E→V→R e RA. Compliance 100%.\n\
             Entregue relatório + plano correção + ROI.",
            &["state", "erp_system", "urgency_level"],
            &[
                &[
                    ("state", "MT"),
                    ("erp_system", "TOTVS Agro"),
                    ("urgency_level", "critical"),
                ],
                &[
                    ("state", "GO"),
                    ("erp_system", "SAP"),
                    ("urgency_level", "high"),
                ],
            ],
        ),
        Template::new(
            "erp_integration",
            "Integração ERP",
            "Integração automática ERP agronegócio",
            "/integrate_erp_agro erp={erp_system} modules={modules} automation_level={automation}\n\n\
             Integração ERP agronegócio:\n\n\
             SISTEMA:\n\
             - ERP: {erp_system}\n\
             - Módulos: {modules}\n\
             - Automação: {automation}\n\n\
             INTEGRAÇÕES:\n\
             - SEFAZ estadual\n\
             - NFP-e automática\n\
             - Workflow safra\n\
             - Dashboard ROI\n\n\
             Siga P→E→V→R e RA. Production-ready.\n\
             Entregue código + testes + deploy.",
            &["erp_system", "modules", "automation"],
            &[
                &[
                    ("erp_system", "TOTVS Agro"),
                    ("modules", "fiscal,estoque,vendas"),
                    ("automation", "95%"),
                ],
                &[
                    ("erp_system", "Protheus"),
                    ("modules", "fiscal,financeiro"),
                    ("automation", "80%"),
                ],
            ],
        ),
        Template::new(
            "roi_calculation",
            "Cálculo ROI",
            "Cálculo ROI detalhado agronegócio",
            "/calculate_roi_agro investment={investment} current_cost={monthly_cost} timeline={timeline}\n\n\
             Cálculo ROI agronegócio:\n\n\
             INVESTIMENTO:\n\
             - Valor: R$ {investment}\n\
             - Custo atual: R$ {monthly_cost}/mês\n\
             - Timeline: {timeline}\n\n\
             ANÁLISE:\n\
             - Baseline operacional\n\
             - Economia projetada\n\
             - Payback period\n\
             - VPL + TIR\n\
             - Cenários (conservador/otimista)\n\n\
             Siga P→E→V→R e RA. Métricas validadas.\n\
             Entregue planilha + dashboard + apresentação.",
            &["investment", "monthly_cost", "timeline"],
            &[
                &[
                    ("investment", "75000"),
                    ("monthly_cost", "35000"),
                    ("timeline", "24 meses"),
                ],
                &[
                    ("investment", "120000"),
                    ("monthly_cost", "50000"),
                    ("timeline", "36 meses"),
                ],
            ],
        ),
    ]
}

fn deployment() -> Vec<Template> {
    vec![
        Template::new(
            "setup_cicd",
            "Setup CI/CD",
            "Configurar pipeline CI/CD completo",
            "/setup_cicd platform={platform} env={environments} tests={test_types}\n\n\
             Configurar CI/CD:\n\n\
             PLATAFORMA:\n\
             - {platform}\n\
             - Ambientes: {environments}\n\
             - Testes: {test_types}\n\n\
             PIPELINE:\n\
             - Build automatizado\n\
             - Testes multi-stage\n\
             - Deploy automático\n\
             - Rollback seguro\n\
             - Monitoramento\n\n\
             Siga P→E→V→R e RA. Zero downtime.\n\
             Entregue workflows + scripts + docs.",
            &["platform", "environments", "test_types"],
            &[
                &[
                    ("platform", "GitHub Actions"),
                    ("environments", "dev,staging,prod"),
                    ("test_types", "unit,integration,e2e"),
                ],
                &[
                    ("platform", "GitLab CI"),
                    ("environments", "test,prod"),
                    ("test_types", "unit,security"),
                ],
            ],
        ),
        Template::new(
            "deploy_render",
            "Deploy Render.com",
            "Deploy otimizado para Render.com",
            "/deploy_render app_type={app_type} framework={framework} features={features}\n\n\
             Deploy Render.com:\n\n\
             APLICAÇÃO:\n\
             - Tipo: {app_type}\n\
             - Framework: {framework}\n\
             - Features: {features}\n\n\
             CONFIGURAÇÃO:\n\
             - requirements.txt otimizado\n\
             - Procfile configurado\n\
             - Environment variables\n\
             - Health checks\n\
             - Auto-scaling\n\n\
             Siga P→E→V→R e RA. Production-ready.\n\
             Entregue config + deploy + monitoring.",
            &["app_type", "framework", "features"],
            &[
                &[
                    ("app_type", "web_app"),
                    ("framework", "flask"),
                    ("features", "api,dashboard,auth"),
                ],
                &[
                    ("app_type", "api_service"),
                    ("framework", "fastapi"),
                    ("features", "rest,docs,metrics"),
                ],
            ],
        ),
    ]
}

fn security() -> Vec<Template> {
    vec![Template::new(
        "security_audit",
        "Auditoria Segurança",
        "Auditoria completa de segurança",
        "/security_audit scope={audit_scope} compliance={compliance_reqs} priority={priority}\n\n\
         Auditoria segurança:\n\n\
         ESCOPO:\n\
         - {audit_scope}\n\
         - Compliance: {compliance_reqs}\n\
         - Prioridade: {priority}\n\n\
         VERIFICAÇÕES:\n\
         - Vulnerabilidades código\n\
         - Secrets expostos\n\
         - Configurações inseguras\n\
         - Dependências desatualizadas\n\
         - Logs PII\n\n\
         Siga P→E→V→R e RA. Zero false positives.\n\
         Entregue relatório + correções + scripts.",
        &["audit_scope", "compliance_reqs", "priority"],
        &[
            &[
                ("audit_scope", "web_app"),
                ("compliance_reqs", "LGPD,SOX"),
                ("priority", "critical"),
            ],
            &[
                ("audit_scope", "api_service"),
                ("compliance_reqs", "OWASP"),
                ("priority", "high"),
            ],
        ],
    )]
}
