/// Static profile content rendered around the dynamic sections.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub specialization: &'static str,
    pub location: &'static str,
    pub education: &'static str,
    pub hero_description: &'static str,
    pub about_description: &'static str,
    pub technical_logic: &'static str,
    pub ui_execution: &'static str,
    pub skills: &'static [SkillGroup],
    pub resume_path: &'static str,
}

#[derive(Debug)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Patrick Anim",
    role: "Software Engineer",
    specialization: "Frontend & Modern Web Systems",
    location: "Accra, Ghana",
    education: "Professional Diploma in Software Engineering",
    hero_description: "I'm a Software Engineer specializing in the architecture of \
        high-performance web interfaces. I focus on bridging the gap between complex \
        system logic and intuitive user experiences.",
    about_description: "Based in Accra, I leverage my background in Software Engineering \
        to build scalable, modern web systems. My approach combines clean architectural \
        principles with a deep focus on performance and responsive design.",
    technical_logic: "Experienced in C#, C++, and JavaScript for complex system design \
        and algorithmic efficiency.",
    ui_execution: "Expert in React and Tailwind CSS for crafting pixel-perfect, \
        accessible, and fluid user interfaces.",
    skills: &[
        SkillGroup {
            label: "Frontend",
            items: &["React", "JavaScript", "Tailwind CSS"],
        },
        SkillGroup {
            label: "Backend",
            items: &["Node.js", "Express", "MongoDB"],
        },
        SkillGroup {
            label: "Languages",
            items: &["C#", "C++", "Java", "Python"],
        },
        SkillGroup {
            label: "Tools",
            items: &["Git", "Postman", "Figma", "Netlify"],
        },
    ],
    resume_path: "/Patrick_Anim_Resume.pdf",
};
