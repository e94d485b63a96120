//! Static fact tables.
//!
//! Keys are lowercase phrases. Table order is lookup order.

pub const DEFINITIONS: &[(&str, &str)] = &[
    (
        "photosynthesis",
        "**Photosynthesis** is the process by which green plants, algae and some bacteria use sunlight, water and carbon dioxide to produce glucose and oxygen. It takes place mainly in the chloroplasts, using the pigment chlorophyll.",
    ),
    (
        "gravity",
        "**Gravity** is the force by which objects with mass attract one another. On Earth it gives objects weight and accelerates falling bodies at about 9.8 m/s².",
    ),
    (
        "dna",
        "**DNA** (deoxyribonucleic acid) is the molecule that carries the genetic instructions of living organisms. It is a double helix built from four bases: adenine, thymine, guanine and cytosine.",
    ),
    (
        "black hole",
        "A **black hole** is a region of spacetime where gravity is so strong that nothing, not even light, can escape. Its boundary is called the event horizon.",
    ),
    (
        "machine learning",
        "**Machine learning** is a branch of artificial intelligence where systems learn patterns from data instead of being explicitly programmed with rules.",
    ),
    (
        "artificial intelligence",
        "**Artificial intelligence** is the field of computer science focused on building systems that perform tasks normally requiring human intelligence, such as reasoning, perception and language.",
    ),
    (
        "blockchain",
        "A **blockchain** is a distributed ledger made of blocks linked by cryptographic hashes, so that recorded transactions are very hard to alter after the fact.",
    ),
    (
        "quantum computing",
        "**Quantum computing** uses qubits, which can exist in superpositions of states, to solve certain problems far faster than classical computers.",
    ),
    (
        "recursion",
        "**Recursion** is a technique where a function solves a problem by calling itself on smaller instances of the same problem until it reaches a base case.",
    ),
    (
        "natural selection",
        "**Natural selection** is the process by which organisms with traits better suited to their environment tend to survive and reproduce more, shifting a population's traits over generations.",
    ),
    (
        "climate change",
        "**Climate change** refers to long-term shifts in global temperatures and weather patterns, driven largely since the 1800s by the burning of fossil fuels.",
    ),
    (
        "democracy",
        "**Democracy** is a system of government in which power is held by the people, who exercise it directly or through freely elected representatives.",
    ),
];

pub const PEOPLE: &[(&str, &str)] = &[
    (
        "albert einstein",
        "**Albert Einstein** (1879–1955) was a theoretical physicist best known for the theory of relativity and the equation E = mc². He received the 1921 Nobel Prize in Physics.",
    ),
    (
        "isaac newton",
        "**Isaac Newton** (1643–1727) was an English mathematician and physicist who formulated the laws of motion and universal gravitation and co-invented calculus.",
    ),
    (
        "marie curie",
        "**Marie Curie** (1867–1934) was a physicist and chemist who pioneered research on radioactivity. She was the first person to win Nobel Prizes in two different sciences.",
    ),
    (
        "ada lovelace",
        "**Ada Lovelace** (1815–1852) was an English mathematician often regarded as the first computer programmer for her work on Charles Babbage's Analytical Engine.",
    ),
    (
        "alan turing",
        "**Alan Turing** (1912–1954) was a British mathematician and computer scientist who formalised computation with the Turing machine and helped break the Enigma code.",
    ),
    (
        "leonardo da vinci",
        "**Leonardo da Vinci** (1452–1519) was an Italian Renaissance artist and inventor, painter of the Mona Lisa and The Last Supper.",
    ),
    (
        "william shakespeare",
        "**William Shakespeare** (1564–1616) was an English playwright and poet, author of Hamlet, Macbeth and Romeo and Juliet.",
    ),
];

pub const EVENTS: &[(&str, &str)] = &[
    (
        "moon landing",
        "The first **Moon landing** happened on July 20, 1969, when Apollo 11 astronauts Neil Armstrong and Buzz Aldrin walked on the lunar surface.",
    ),
    (
        "world war ii",
        "**World War II** lasted from 1939 to 1945. It began with Germany's invasion of Poland and ended with the surrender of Germany in May and Japan in September 1945.",
    ),
    (
        "french revolution",
        "The **French Revolution** began in 1789 with the storming of the Bastille and lasted until 1799, when Napoleon Bonaparte took power.",
    ),
    (
        "berlin wall",
        "The **Berlin Wall** was built in 1961 and fell on November 9, 1989, leading to German reunification in 1990.",
    ),
    (
        "titanic",
        "The **Titanic** sank on April 15, 1912, after striking an iceberg on its maiden voyage from Southampton to New York.",
    ),
    (
        "declaration of independence",
        "The **Declaration of Independence** was adopted by the Continental Congress on July 4, 1776.",
    ),
];

pub const PROCESSES: &[(&str, &str)] = &[
    (
        "photosynthesis",
        "**How photosynthesis works:**\n1. Chlorophyll absorbs sunlight\n2. Water is split into oxygen and hydrogen\n3. Carbon dioxide is fixed into sugars in the Calvin cycle\n4. Oxygen is released as a by-product",
    ),
    (
        "internet",
        "**How the Internet works:** data is broken into packets, each addressed with IP addresses, routed across many networks, and reassembled at the destination using TCP.",
    ),
    (
        "vaccine",
        "**How vaccines work:** they expose the immune system to a harmless piece or version of a pathogen, so it learns to recognise it and responds faster to a real infection.",
    ),
    (
        "rainbow",
        "**How rainbows form:** sunlight enters raindrops, refracts, reflects off the back of the drop and refracts again on the way out, splitting white light into its colours.",
    ),
    (
        "heart",
        "**How the heart works:** its four chambers contract in sequence, pumping oxygen-poor blood to the lungs and oxygen-rich blood out to the rest of the body.",
    ),
    (
        "gps",
        "**How GPS works:** a receiver measures the travel time of signals from at least four satellites and uses trilateration to compute its position.",
    ),
];

pub const LOCATIONS: &[(&str, &str)] = &[
    (
        "eiffel tower",
        "The **Eiffel Tower** is in Paris, France, on the Champ de Mars beside the Seine.",
    ),
    (
        "great wall of china",
        "The **Great Wall of China** stretches across northern China, from Shanhaiguan in the east to Jiayuguan in the west.",
    ),
    (
        "mount everest",
        "**Mount Everest** sits on the border between Nepal and the Tibet Autonomous Region of China, in the Himalayas.",
    ),
    (
        "statue of liberty",
        "The **Statue of Liberty** stands on Liberty Island in New York Harbor, USA.",
    ),
    (
        "machu picchu",
        "**Machu Picchu** is an Inca citadel high in the Andes Mountains of Peru, above the Urubamba River valley.",
    ),
    (
        "sahara desert",
        "The **Sahara Desert** covers most of North Africa, spanning countries from Morocco and Mauritania to Egypt and Sudan.",
    ),
];
